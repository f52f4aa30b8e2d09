//! Per-call marshalling state: the token stream plus codec settings.

use connect_sdk_json_stream::{JsonReader, JsonWriter};

use crate::CodecSettings;

/// Output side of a marshalling call.
#[derive(Debug, Default)]
pub struct MarshallerContext {
    writer: JsonWriter,
    settings: CodecSettings,
}

impl MarshallerContext {
    pub fn new(settings: CodecSettings) -> Self {
        Self {
            writer: JsonWriter::new(),
            settings,
        }
    }

    pub fn writer(&mut self) -> &mut JsonWriter {
        &mut self.writer
    }

    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    pub fn finish(self) -> String {
        self.writer.finish()
    }
}

/// Input side of an unmarshalling call.
pub struct UnmarshallerContext<'a> {
    reader: JsonReader<'a>,
    settings: CodecSettings,
}

impl<'a> UnmarshallerContext<'a> {
    pub fn new(input: &'a [u8], settings: CodecSettings) -> Self {
        Self {
            reader: JsonReader::new(input),
            settings,
        }
    }

    pub fn reader(&mut self) -> &mut JsonReader<'a> {
        &mut self.reader
    }

    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }
}
