//! Timestamp converter.
//!
//! Written as epoch seconds with millisecond precision by default, or as an
//! RFC 3339 string when [`TimestampFormat::Rfc3339`] is selected. Reading
//! accepts a JSON number, a numeric string or an RFC 3339 string.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::primitive::next_scalar;
use crate::{
    FieldKind, JsonMarshall, JsonUnmarshall, MapperError, MarshallerContext, PrimitiveKind,
    TimestampFormat, UnmarshallerContext, WireType,
};

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Formats a timestamp as epoch seconds, truncated to milliseconds.
///
/// Whole seconds carry no fraction and trailing zeros are trimmed, so
/// `2019-03-18T00:00:00.120Z` becomes `1552867200.12`.
pub fn format_epoch_seconds(value: OffsetDateTime) -> String {
    let millis = value.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLI);
    let sign = if millis < 0 { "-" } else { "" };
    let abs = millis.unsigned_abs();
    let (whole, frac) = (abs / 1000, abs % 1000);
    if frac == 0 {
        return format!("{sign}{whole}");
    }
    let frac = format!("{frac:03}");
    format!("{sign}{whole}.{}", frac.trim_end_matches('0'))
}

/// Parses epoch seconds (rounded to milliseconds) or an RFC 3339 string.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, MapperError> {
    let text = text.trim();
    let invalid = || MapperError::InvalidTimestamp(text.to_owned());
    if let Ok(seconds) = text.parse::<f64>() {
        if !seconds.is_finite() {
            return Err(invalid());
        }
        // float-to-int casts saturate; the multiply can still overflow
        let millis = (seconds * 1000.0).round() as i128;
        let nanos = millis.checked_mul(NANOS_PER_MILLI).ok_or_else(invalid)?;
        return OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| invalid());
    }
    OffsetDateTime::parse(text, &Rfc3339).map_err(|_| invalid())
}

impl WireType for OffsetDateTime {
    const KIND: FieldKind = FieldKind::Primitive(PrimitiveKind::Timestamp);
}

impl JsonMarshall for OffsetDateTime {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        match ctx.settings().timestamp_format {
            TimestampFormat::EpochSeconds => {
                ctx.writer().value_raw_number(&format_epoch_seconds(*self));
            }
            TimestampFormat::Rfc3339 => {
                let text = self.to_offset(UtcOffset::UTC).format(&Rfc3339)?;
                ctx.writer().value_str(&text);
            }
        }
        Ok(())
    }
}

impl JsonUnmarshall for OffsetDateTime {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        match next_scalar(ctx)? {
            Some(text) => parse_timestamp(&text).map(Some),
            None => Ok(None),
        }
    }
}
