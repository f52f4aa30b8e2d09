//! Forward-only JSON token reader and writer.
//!
//! The record mappers in `connect-sdk-json-mapper` never build an
//! intermediate document tree. They pull tokens from a [`JsonReader`] and push
//! tokens into a [`JsonWriter`], one property at a time.
//!
//! # Overview
//!
//! - [`JsonReader`] - pulls tokens from a UTF-8 byte slice with cursor tracking
//! - [`JsonWriter`] - appends tokens to a growing output string
//! - [`JsonToken`] - the kind of the next token in the stream
//!
//! # Example
//!
//! ```
//! use connect_sdk_json_stream::{JsonReader, JsonWriter};
//!
//! let mut writer = JsonWriter::new();
//! writer.begin_object();
//! writer.name("Id").value_str("123");
//! writer.end_object();
//! let json = writer.finish();
//! assert_eq!(json, r#"{"Id":"123"}"#);
//!
//! let mut reader = JsonReader::new(json.as_bytes());
//! reader.begin_object().unwrap();
//! assert_eq!(reader.next_name().unwrap(), "Id");
//! assert_eq!(reader.next_string().unwrap(), "123");
//! reader.end_object().unwrap();
//! reader.finish().unwrap();
//! ```

mod error;
mod reader;
mod token;
mod writer;

pub use error::JsonStreamError;
pub use reader::{JsonReader, DEFAULT_MAX_DEPTH};
pub use token::JsonToken;
pub use writer::JsonWriter;
