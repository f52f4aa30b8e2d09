use std::fmt;

/// Kind of the next token in a JSON stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonToken {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    /// A property name inside an object.
    Name,
    String,
    Number,
    Bool,
    Null,
    /// No more tokens: the top-level value has been consumed.
    EndDocument,
}

impl JsonToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeginObject => "BEGIN_OBJECT",
            Self::EndObject => "END_OBJECT",
            Self::BeginArray => "BEGIN_ARRAY",
            Self::EndArray => "END_ARRAY",
            Self::Name => "NAME",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Bool => "BOOLEAN",
            Self::Null => "NULL",
            Self::EndDocument => "END_DOCUMENT",
        }
    }

    /// Returns `true` for tokens that open an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::BeginObject | Self::BeginArray)
    }

    /// Returns `true` for string, number and boolean tokens.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Bool)
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
