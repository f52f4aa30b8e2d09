//! Primitive converters: string, integer, long, float, double, boolean.
//!
//! Readers accept any scalar token and convert its text, so `"42"` reads as
//! an integer and `true` reads as the string `"true"`.

use std::str::FromStr;

use connect_sdk_json_stream::JsonToken;

use crate::{
    FieldKind, JsonMarshall, JsonUnmarshall, MapperError, MarshallerContext, PrimitiveKind,
    UnmarshallerContext, WireType,
};

/// Reads the next scalar as text.
///
/// `null` yields `None`; an object or array is skipped and yields `None`.
pub(crate) fn next_scalar(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<String>, MapperError> {
    let reader = ctx.reader();
    match reader.peek()? {
        JsonToken::Null => {
            reader.next_null()?;
            Ok(None)
        }
        token if token.is_container() => {
            tracing::warn!(found = %token, "expected a JSON scalar, skipping value");
            reader.skip_value()?;
            Ok(None)
        }
        _ => Ok(Some(reader.next_string()?)),
    }
}

fn parse_scalar<T: FromStr>(
    ctx: &mut UnmarshallerContext<'_>,
    kind: PrimitiveKind,
) -> Result<Option<T>, MapperError> {
    let Some(text) = next_scalar(ctx)? else {
        return Ok(None);
    };
    match text.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(MapperError::InvalidPrimitive { kind, text }),
    }
}

impl WireType for String {
    const KIND: FieldKind = FieldKind::Primitive(PrimitiveKind::String);
}

impl JsonMarshall for String {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        self.as_str().marshall(ctx)
    }
}

impl JsonMarshall for str {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        ctx.writer().value_str(self);
        Ok(())
    }
}

impl JsonUnmarshall for String {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        next_scalar(ctx)
    }
}

impl WireType for bool {
    const KIND: FieldKind = FieldKind::Primitive(PrimitiveKind::Boolean);
}

impl JsonMarshall for bool {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        ctx.writer().value_bool(*self);
        Ok(())
    }
}

impl JsonUnmarshall for bool {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        let Some(text) = next_scalar(ctx)? else {
            return Ok(None);
        };
        if text.eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if text.eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            Err(MapperError::InvalidPrimitive {
                kind: PrimitiveKind::Boolean,
                text,
            })
        }
    }
}

macro_rules! integer_converter {
    ($ty:ty, $kind:expr) => {
        impl WireType for $ty {
            const KIND: FieldKind = FieldKind::Primitive($kind);
        }

        impl JsonMarshall for $ty {
            fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
                ctx.writer().value_i64(i64::from(*self));
                Ok(())
            }
        }

        impl JsonUnmarshall for $ty {
            fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
                parse_scalar(ctx, $kind)
            }
        }
    };
}

integer_converter!(i32, PrimitiveKind::Integer);
integer_converter!(i64, PrimitiveKind::Long);

impl WireType for f64 {
    const KIND: FieldKind = FieldKind::Primitive(PrimitiveKind::Double);
}

impl JsonMarshall for f64 {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        ctx.writer().value_f64(*self);
        Ok(())
    }
}

impl JsonUnmarshall for f64 {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        parse_scalar(ctx, PrimitiveKind::Double)
    }
}

impl WireType for f32 {
    const KIND: FieldKind = FieldKind::Primitive(PrimitiveKind::Float);
}

impl JsonMarshall for f32 {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        if self.is_finite() {
            // shortest text that reads back as the same f32
            ctx.writer().value_raw_number(&self.to_string());
        } else {
            ctx.writer().value_f64(f64::from(*self));
        }
        Ok(())
    }
}

impl JsonUnmarshall for f32 {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        parse_scalar(ctx, PrimitiveKind::Float)
    }
}
