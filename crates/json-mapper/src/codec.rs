//! Marshaller/unmarshaller traits and top-level entry points.

use crate::{CodecSettings, MapperError, MarshallerContext, UnmarshallerContext};

/// Writes a value as JSON.
pub trait JsonMarshall {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError>;
}

/// Reads a value from JSON.
///
/// `Ok(None)` means the wire carried `null`, or a shape that cannot hold this
/// type and was skipped. Stream failures are returned as errors.
pub trait JsonUnmarshall: Sized {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError>;
}

pub fn to_json_string<T: JsonMarshall + ?Sized>(value: &T) -> Result<String, MapperError> {
    to_json_string_with(value, CodecSettings::default())
}

pub fn to_json_string_with<T: JsonMarshall + ?Sized>(
    value: &T,
    settings: CodecSettings,
) -> Result<String, MapperError> {
    let mut ctx = MarshallerContext::new(settings);
    value.marshall(&mut ctx)?;
    Ok(ctx.finish())
}

pub fn to_json_vec<T: JsonMarshall + ?Sized>(value: &T) -> Result<Vec<u8>, MapperError> {
    to_json_string(value).map(String::into_bytes)
}

pub fn to_json_vec_with<T: JsonMarshall + ?Sized>(
    value: &T,
    settings: CodecSettings,
) -> Result<Vec<u8>, MapperError> {
    to_json_string_with(value, settings).map(String::into_bytes)
}

/// Reads one complete JSON document.
///
/// A blank payload reads as `None`, matching operations whose responses
/// carry no body.
pub fn from_json_slice<T: JsonUnmarshall>(input: &[u8]) -> Result<Option<T>, MapperError> {
    from_json_slice_with(input, CodecSettings::default())
}

pub fn from_json_slice_with<T: JsonUnmarshall>(
    input: &[u8],
    settings: CodecSettings,
) -> Result<Option<T>, MapperError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let mut ctx = UnmarshallerContext::new(input, settings);
    let value = T::unmarshall(&mut ctx)?;
    ctx.reader().finish()?;
    Ok(value)
}

pub fn from_json_str<T: JsonUnmarshall>(input: &str) -> Result<Option<T>, MapperError> {
    from_json_slice(input.as_bytes())
}

pub fn from_json_str_with<T: JsonUnmarshall>(
    input: &str,
    settings: CodecSettings,
) -> Result<Option<T>, MapperError> {
    from_json_slice_with(input.as_bytes(), settings)
}
