//! Mapper error type.

use connect_sdk_json_stream::JsonStreamError;
use thiserror::Error;

use crate::PrimitiveKind;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error(transparent)]
    Stream(#[from] JsonStreamError),
    #[error("invalid {kind} value `{text}`")]
    InvalidPrimitive { kind: PrimitiveKind, text: String },
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
    #[error("failed to format timestamp: {0}")]
    TimestampFormat(#[from] time::error::Format),
}
