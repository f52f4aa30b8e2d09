//! Declarative generators for records, enums and service exceptions.
//!
//! The generated code only names items through `$crate::`, so model crates
//! depend on nothing but this crate.

/// Declares a record type with its field table, marshaller and unmarshaller.
///
/// Every field is optional; `None` is never written. Fields are written in
/// declaration order, properties the record does not declare are skipped on
/// read, and a repeated property keeps its last value.
///
/// ```
/// use connect_sdk_json_mapper::{from_json_str, json_record, Record};
///
/// json_record! {
///     /// A routing profile reference.
///     pub struct RoutingProfileReference {
///         id: String => "Id",
///         arn: String => "Arn",
///     }
/// }
///
/// assert_eq!(RoutingProfileReference::SCHEMA.fields.len(), 2);
/// let parsed: RoutingProfileReference =
///     from_json_str(r#"{"Extra":[1,{"a":2}],"Id":"rp-1"}"#).unwrap().unwrap();
/// assert_eq!(parsed.id.as_deref(), Some("rp-1"));
/// assert_eq!(parsed.arn, None);
/// ```
#[macro_export]
macro_rules! json_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $crate::WireType for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Record(stringify!($name));
        }

        impl $crate::Record for $name {
            const SCHEMA: $crate::RecordSchema = $crate::RecordSchema {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::FieldDescriptor {
                            member: stringify!($field),
                            wire_name: $wire,
                            kind: <$ty as $crate::WireType>::KIND,
                        },
                    )*
                ],
            };
        }

        impl $crate::JsonMarshall for $name {
            fn marshall(
                &self,
                ctx: &mut $crate::MarshallerContext,
            ) -> ::core::result::Result<(), $crate::MapperError> {
                ctx.writer().begin_object();
                $(
                    if let ::core::option::Option::Some(value) = &self.$field {
                        ctx.writer().name($wire);
                        $crate::JsonMarshall::marshall(value, ctx)?;
                    }
                )*
                ctx.writer().end_object();
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::JsonUnmarshall for $name {
            #[allow(unused_mut)]
            fn unmarshall(
                ctx: &mut $crate::UnmarshallerContext<'_>,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::MapperError> {
                if !$crate::record::enter_object(ctx, stringify!($name))? {
                    return ::core::result::Result::Ok(::core::option::Option::None);
                }
                let mut record = Self::default();
                while ctx.reader().has_next()? {
                    let name = ctx.reader().next_name()?;
                    match name.as_str() {
                        $(
                            $wire => {
                                record.$field = <$ty as $crate::JsonUnmarshall>::unmarshall(ctx)?;
                            }
                        )*
                        _ => $crate::record::skip_unknown(ctx, stringify!($name), &name)?,
                    }
                }
                $crate::record::leave_object(ctx)?;
                ::core::result::Result::Ok(::core::option::Option::Some(record))
            }
        }
    };
}

/// Declares a string enum. Values outside the declared set are kept in an
/// `Unknown` variant so newer service values survive a round trip.
///
/// ```
/// use connect_sdk_json_mapper::{from_json_str, json_enum};
///
/// json_enum! {
///     pub enum Channel {
///         Voice => "VOICE",
///         Chat => "CHAT",
///     }
/// }
///
/// assert_eq!(Channel::from("VOICE"), Channel::Voice);
/// let parsed: Channel = from_json_str(r#""TASK""#).unwrap().unwrap();
/// assert_eq!(parsed, Channel::Unknown("TASK".to_owned()));
/// assert_eq!(parsed.as_str(), "TASK");
/// ```
#[macro_export]
macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value not known to this client.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Wire values of the declared variants.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)*
                    other => Self::Unknown(::std::borrow::ToOwned::to_owned(other)),
                }
            }
        }

        impl ::core::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::WireType for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Enum(stringify!($name));
        }

        impl $crate::JsonMarshall for $name {
            fn marshall(
                &self,
                ctx: &mut $crate::MarshallerContext,
            ) -> ::core::result::Result<(), $crate::MapperError> {
                ctx.writer().value_str(self.as_str());
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::JsonUnmarshall for $name {
            fn unmarshall(
                ctx: &mut $crate::UnmarshallerContext<'_>,
            ) -> ::core::result::Result<::core::option::Option<Self>, $crate::MapperError> {
                let value =
                    <::std::string::String as $crate::JsonUnmarshall>::unmarshall(ctx)?;
                ::core::result::Result::Ok(value.map(Self::from))
            }
        }
    };
}

/// Declares a modeled service exception and its error unmarshaller.
///
/// The exception carries the common [`ServiceError`](crate::ServiceError)
/// metadata plus any modeled properties, which are decoded from the error
/// body with the regular unmarshallers. The unmarshaller matches responses
/// whose error code equals the given code exactly.
///
/// ```
/// use connect_sdk_json_mapper::{service_exception, ErrorUnmarshallerRegistry, ServiceError};
///
/// service_exception! {
///     pub struct LimitExceededException => "LimitExceededException" {}
///     unmarshaller LimitExceededExceptionUnmarshaller;
/// }
///
/// #[derive(Debug)]
/// enum Error {
///     LimitExceeded(LimitExceededException),
///     Service(ServiceError),
/// }
///
/// impl From<LimitExceededException> for Error {
///     fn from(err: LimitExceededException) -> Self {
///         Error::LimitExceeded(err)
///     }
/// }
///
/// impl From<ServiceError> for Error {
///     fn from(err: ServiceError) -> Self {
///         Error::Service(err)
///     }
/// }
///
/// let registry = ErrorUnmarshallerRegistry::<Error>::new()
///     .with(LimitExceededExceptionUnmarshaller);
/// let body = br#"{"__type":"LimitExceededException","message":"slow down"}"#;
/// let err = registry.handle(429, Vec::<(&str, &str)>::new(), body);
/// assert!(matches!(err, Error::LimitExceeded(_)));
/// ```
#[macro_export]
macro_rules! service_exception {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $code:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
        unmarshaller $unmarshaller:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            pub meta: $crate::ServiceError,
            $(
                $(#[$field_meta])*
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $name {
            pub fn new(meta: $crate::ServiceError) -> Self {
                Self {
                    meta,
                    $($field: ::core::option::Option::None,)*
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}: {}", stringify!($name), self.meta)
            }
        }

        impl ::std::error::Error for $name {}

        impl $crate::ServiceException for $name {
            const ERROR_CODE: &'static str = $code;

            fn service_error(&self) -> &$crate::ServiceError {
                &self.meta
            }
        }

        #[doc = concat!("Decodes [`", stringify!($name), "`] from an error response.")]
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $unmarshaller;

        impl $unmarshaller {
            #[allow(unused_mut, unused_variables)]
            pub fn decode(
                &self,
                error: &$crate::JsonErrorResponse,
                settings: $crate::CodecSettings,
            ) -> ::core::result::Result<$name, $crate::MapperError> {
                let mut exception = $name::new($crate::ServiceError::from_response(error));
                $(
                    exception.$field = error.property::<$ty>($wire, settings)?;
                )*
                ::core::result::Result::Ok(exception)
            }
        }

        impl<E: ::core::convert::From<$name>> $crate::ErrorUnmarshaller<E> for $unmarshaller {
            fn error_code(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some($code)
            }

            fn unmarshall(
                &self,
                error: &$crate::JsonErrorResponse,
                settings: $crate::CodecSettings,
            ) -> ::core::result::Result<E, $crate::MapperError> {
                self.decode(error, settings).map(E::from)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        from_json_str, to_json_string, FieldKind, IndexMap, OffsetDateTime, Record, WireType,
    };

    json_enum! {
        pub enum Color {
            Red => "RED",
            Green => "GREEN",
        }
    }

    json_record! {
        pub struct Inner {
            label: String => "Label",
        }
    }

    json_record! {
        pub struct Outer {
            id: String => "Id",
            count: i32 => "Count",
            color: Color => "Color",
            inner: Inner => "Inner",
            items: Vec<Inner> => "Items",
            tags: IndexMap<String, String> => "Tags",
            created: OffsetDateTime => "Created",
        }
    }

    json_record! {
        pub struct Empty {}
    }

    #[test]
    fn test_declaration_order_on_write() {
        let outer = Outer {
            tags: Some(IndexMap::from([("k".to_owned(), "v".to_owned())])),
            id: Some("1".to_owned()),
            color: Some(Color::Green),
            ..Default::default()
        };
        assert_eq!(
            to_json_string(&outer).unwrap(),
            r#"{"Id":"1","Color":"GREEN","Tags":{"k":"v"}}"#
        );
    }

    #[test]
    fn test_read_any_property_order() {
        let outer: Outer = from_json_str(
            r#"{"Items":[{"Label":"a"}],"Count":"3","Inner":{"Label":"b"},"Id":"x"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(outer.id.as_deref(), Some("x"));
        assert_eq!(outer.count, Some(3));
        assert_eq!(outer.inner.and_then(|i| i.label).as_deref(), Some("b"));
        assert_eq!(outer.items.map(|items| items.len()), Some(1));
    }

    #[test]
    fn test_scalar_where_record_expected() {
        let outer: Outer = from_json_str(r#"{"Inner":"oops","Items":[null,7,{"Label":"z"}]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(outer.inner, None);
        assert_eq!(
            outer.items,
            Some(vec![Inner {
                label: Some("z".to_owned())
            }])
        );
    }

    #[test]
    fn test_last_duplicate_wins() {
        let outer: Outer = from_json_str(r#"{"Id":"a","Id":"b"}"#).unwrap().unwrap();
        assert_eq!(outer.id.as_deref(), Some("b"));
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(to_json_string(&Empty::default()).unwrap(), "{}");
        let parsed: Empty = from_json_str(r#"{"anything":{"goes":[1]}}"#).unwrap().unwrap();
        assert_eq!(parsed, Empty {});
        assert!(Empty::SCHEMA.fields.is_empty());
    }

    #[test]
    fn test_schema_table() {
        let schema = Outer::SCHEMA;
        assert!(schema.validate().is_ok());
        assert_eq!(
            schema.wire_names().collect::<Vec<_>>(),
            ["Id", "Count", "Color", "Inner", "Items", "Tags", "Created"]
        );
        let kinds: Vec<String> = schema.fields.iter().map(|f| f.kind.to_string()).collect();
        assert_eq!(
            kinds,
            [
                "string",
                "integer",
                "enum:Color",
                "record:Inner",
                "list<record:Inner>",
                "map<string>",
                "timestamp"
            ]
        );
        assert!(matches!(Outer::KIND, FieldKind::Record("Outer")));
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(Color::VALUES, &["RED", "GREEN"]);
        assert_eq!(Color::from("BLUE".to_owned()).to_string(), "BLUE");
        assert_eq!(to_json_string(&Color::Red).unwrap(), r#""RED""#);
    }
}
