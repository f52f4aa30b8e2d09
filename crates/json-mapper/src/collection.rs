//! List and map converters.

use connect_sdk_json_stream::JsonToken;
use indexmap::IndexMap;

use crate::{
    FieldKind, JsonMarshall, JsonUnmarshall, MapperError, MarshallerContext, UnmarshallerContext,
    WireType,
};

fn kind_of<T: WireType>() -> FieldKind {
    T::KIND
}

/// Consumes the opening token of a container, or the whole value when the
/// wire carries something else. Returns `false` when there is nothing to read.
fn enter(ctx: &mut UnmarshallerContext<'_>, open: JsonToken) -> Result<bool, MapperError> {
    let reader = ctx.reader();
    let found = reader.peek()?;
    if found == open {
        if open == JsonToken::BeginArray {
            reader.begin_array()?;
        } else {
            reader.begin_object()?;
        }
        return Ok(true);
    }
    if found == JsonToken::Null {
        reader.next_null()?;
    } else {
        tracing::warn!(expected = %open, %found, "unexpected collection shape, skipping value");
        reader.skip_value()?;
    }
    Ok(false)
}

impl<T: WireType> WireType for Vec<T> {
    const KIND: FieldKind = FieldKind::List(kind_of::<T>);
}

impl<T: JsonMarshall> JsonMarshall for [T] {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        ctx.writer().begin_array();
        for item in self {
            item.marshall(ctx)?;
        }
        ctx.writer().end_array();
        Ok(())
    }
}

impl<T: JsonMarshall> JsonMarshall for Vec<T> {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        self.as_slice().marshall(ctx)
    }
}

impl<T: JsonUnmarshall> JsonUnmarshall for Vec<T> {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        if !enter(ctx, JsonToken::BeginArray)? {
            return Ok(None);
        }
        let mut items = Vec::new();
        while ctx.reader().has_next()? {
            if let Some(item) = T::unmarshall(ctx)? {
                items.push(item);
            }
        }
        ctx.reader().end_array()?;
        Ok(Some(items))
    }
}

impl<T: WireType> WireType for IndexMap<String, T> {
    const KIND: FieldKind = FieldKind::Map(kind_of::<T>);
}

impl<T: JsonMarshall> JsonMarshall for IndexMap<String, T> {
    fn marshall(&self, ctx: &mut MarshallerContext) -> Result<(), MapperError> {
        ctx.writer().begin_object();
        for (key, value) in self {
            ctx.writer().name(key);
            value.marshall(ctx)?;
        }
        ctx.writer().end_object();
        Ok(())
    }
}

impl<T: JsonUnmarshall> JsonUnmarshall for IndexMap<String, T> {
    fn unmarshall(ctx: &mut UnmarshallerContext<'_>) -> Result<Option<Self>, MapperError> {
        if !enter(ctx, JsonToken::BeginObject)? {
            return Ok(None);
        }
        let mut entries = IndexMap::new();
        while ctx.reader().has_next()? {
            let key = ctx.reader().next_name()?;
            if let Some(value) = T::unmarshall(ctx)? {
                entries.insert(key, value);
            }
        }
        ctx.reader().end_object()?;
        Ok(Some(entries))
    }
}
