//! Codec configuration.

/// Wire representation used when writing timestamps.
///
/// Reading accepts every representation regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Seconds since the Unix epoch as a JSON number with millisecond
    /// precision, e.g. `1552867200.123`.
    #[default]
    EpochSeconds,
    /// RFC 3339 / ISO-8601 string, e.g. `"2019-03-18T00:00:00.123Z"`.
    Rfc3339,
}

/// Settings threaded through every marshaller and unmarshaller call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecSettings {
    pub timestamp_format: TimestampFormat,
}

impl CodecSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CodecSettings::default();
        assert_eq!(settings.timestamp_format, TimestampFormat::EpochSeconds);
    }

    #[test]
    fn test_with_timestamp_format() {
        let settings = CodecSettings::new().with_timestamp_format(TimestampFormat::Rfc3339);
        assert_eq!(settings.timestamp_format, TimestampFormat::Rfc3339);
    }
}
