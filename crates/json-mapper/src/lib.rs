//! Schema-driven JSON mapping for trees of typed records.
//!
//! Every API shape gets a pair of adapters: a marshaller that writes the
//! record as a JSON object and an unmarshaller that reads it back. Both are
//! trait implementations ([`JsonMarshall`], [`JsonUnmarshall`]) generated by
//! the [`json_record!`] and [`json_enum!`] macros, so the per-type
//! dispatch table is resolved at compile time. Error responses are decoded by
//! an [`ErrorUnmarshallerRegistry`] of exception decoders generated with
//! [`service_exception!`].
//!
//! # Wire rules
//!
//! - absent fields are omitted on write (sparse representation);
//! - unknown properties are skipped on read (forward compatibility);
//! - a scalar or `null` where a record was expected reads as `None`.
//!
//! # Example
//!
//! ```
//! use connect_sdk_json_mapper::{from_json_str, json_record, to_json_string};
//!
//! json_record! {
//!     pub struct QueueReference {
//!         id: String => "Id",
//!         arn: String => "Arn",
//!         name: String => "Name",
//!     }
//! }
//!
//! let queue = QueueReference {
//!     id: Some("123".into()),
//!     name: Some("abc".into()),
//!     ..Default::default()
//! };
//! let json = to_json_string(&queue).unwrap();
//! assert_eq!(json, r#"{"Id":"123","Name":"abc"}"#);
//!
//! let parsed: QueueReference = from_json_str(&json).unwrap().unwrap();
//! assert_eq!(parsed, queue);
//! ```

mod codec;
mod collection;
mod context;
mod error;
mod error_response;
mod error_unmarshaller;
mod macros;
mod primitive;
#[doc(hidden)]
pub mod record;
mod schema;
mod settings;
pub mod timestamp;

pub use codec::{
    from_json_slice, from_json_slice_with, from_json_str, from_json_str_with, to_json_string,
    to_json_string_with, to_json_vec, to_json_vec_with, JsonMarshall, JsonUnmarshall,
};
pub use context::{MarshallerContext, UnmarshallerContext};
pub use error::MapperError;
pub use error_response::{
    ErrorType, JsonErrorResponse, ServiceError, ERROR_TYPE_HEADER, REQUEST_ID_HEADER,
};
pub use error_unmarshaller::{
    ErrorUnmarshaller, ErrorUnmarshallerRegistry, GenericErrorUnmarshaller, ServiceException,
};
pub use schema::{
    FieldDescriptor, FieldKind, PrimitiveKind, Record, RecordSchema, SchemaError, WireType,
};
pub use settings::{CodecSettings, TimestampFormat};

pub use connect_sdk_json_stream::{JsonReader, JsonStreamError, JsonToken, JsonWriter};
pub use indexmap::{self, IndexMap};
pub use time::{self, OffsetDateTime};
