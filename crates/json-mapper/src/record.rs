//! Runtime support for code generated by [`json_record!`](crate::json_record).

use connect_sdk_json_stream::JsonToken;

use crate::{MapperError, UnmarshallerContext};

/// Enters a record's object.
///
/// Returns `false` after consuming the value when the wire does not carry an
/// object: `null` silently, anything else with a warning.
pub fn enter_object(
    ctx: &mut UnmarshallerContext<'_>,
    record: &'static str,
) -> Result<bool, MapperError> {
    let reader = ctx.reader();
    match reader.peek()? {
        JsonToken::BeginObject => {
            reader.begin_object()?;
            Ok(true)
        }
        JsonToken::Null => {
            reader.next_null()?;
            Ok(false)
        }
        found => {
            tracing::warn!(record, %found, "expected a JSON object, skipping value");
            reader.skip_value()?;
            Ok(false)
        }
    }
}

/// Skips the value of a property the record does not declare.
pub fn skip_unknown(
    ctx: &mut UnmarshallerContext<'_>,
    record: &'static str,
    name: &str,
) -> Result<(), MapperError> {
    tracing::trace!(record, property = name, "skipping unknown property");
    ctx.reader().skip_value()?;
    Ok(())
}

/// Leaves a record's object.
pub fn leave_object(ctx: &mut UnmarshallerContext<'_>) -> Result<(), MapperError> {
    ctx.reader().end_object()?;
    Ok(())
}
