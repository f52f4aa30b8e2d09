//! JSON stream error type.

use thiserror::Error;

use crate::JsonToken;

#[derive(Debug, Error)]
pub enum JsonStreamError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    #[error("invalid JSON at byte {0}")]
    Invalid(usize),
    #[error("expected {expected} but found {found} at byte {at}")]
    UnexpectedToken {
        expected: &'static str,
        found: JsonToken,
        at: usize,
    },
    #[error("nesting deeper than {limit} levels at byte {at}")]
    DepthLimitExceeded { limit: usize, at: usize },
    #[error("trailing characters after JSON document at byte {0}")]
    TrailingCharacters(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
