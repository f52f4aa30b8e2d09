//! Field-descriptor tables describing each record's wire shape.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::{JsonMarshall, JsonUnmarshall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Timestamp,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a field.
///
/// Container kinds hold a function returning the element kind so that the
/// whole table stays a compile-time constant.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Primitive(PrimitiveKind),
    /// A string enum, by Rust type name.
    Enum(&'static str),
    /// A nested record, by Rust type name.
    Record(&'static str),
    List(fn() -> FieldKind),
    Map(fn() -> FieldKind),
}

impl FieldKind {
    /// Element kind of a list or value kind of a map.
    pub fn element(&self) -> Option<FieldKind> {
        match self {
            Self::List(element) | Self::Map(element) => Some(element()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Enum(name) => write!(f, "enum:{name}"),
            Self::Record(name) => write!(f, "record:{name}"),
            Self::List(element) => write!(f, "list<{}>", element()),
            Self::Map(element) => write!(f, "map<{}>", element()),
        }
    }
}

/// Types that can appear as a record field.
pub trait WireType {
    const KIND: FieldKind;
}

/// One field of a record: Rust member name, JSON property name and shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub member: &'static str,
    pub wire_name: &'static str,
    pub kind: FieldKind,
}

/// The ordered field table of one record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("record {record} declares wire name `{wire_name}` more than once")]
    DuplicateWireName {
        record: &'static str,
        wire_name: &'static str,
    },
    #[error("record {record} has a field `{member}` with an empty wire name")]
    EmptyWireName {
        record: &'static str,
        member: &'static str,
    },
}

impl RecordSchema {
    /// Looks up a field by its JSON property name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    pub fn wire_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.wire_name)
    }

    /// Checks that wire names are non-empty and unique within the record.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in self.fields {
            if field.wire_name.is_empty() {
                return Err(SchemaError::EmptyWireName {
                    record: self.name,
                    member: field.member,
                });
            }
            if !seen.insert(field.wire_name) {
                return Err(SchemaError::DuplicateWireName {
                    record: self.name,
                    wire_name: field.wire_name,
                });
            }
        }
        Ok(())
    }
}

/// A record type with a generated marshaller, unmarshaller and field table.
pub trait Record: JsonMarshall + JsonUnmarshall + Default {
    const SCHEMA: RecordSchema;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor {
            member: "id",
            wire_name: "Id",
            kind: FieldKind::Primitive(PrimitiveKind::String),
        },
        FieldDescriptor {
            member: "identifier",
            wire_name: "Id",
            kind: FieldKind::Primitive(PrimitiveKind::Long),
        },
    ];

    #[test]
    fn test_duplicate_wire_name_rejected() {
        let schema = RecordSchema {
            name: "Broken",
            fields: FIELDS,
        };
        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicateWireName {
                record: "Broken",
                wire_name: "Id",
            })
        );
    }

    #[test]
    fn test_field_lookup() {
        let schema = RecordSchema {
            name: "Partial",
            fields: &FIELDS[..1],
        };
        assert!(schema.validate().is_ok());
        assert_eq!(schema.field("Id").map(|f| f.member), Some("id"));
        assert!(schema.field("id").is_none());
        assert_eq!(schema.wire_names().collect::<Vec<_>>(), vec!["Id"]);
    }

    #[test]
    fn test_empty_wire_name_rejected() {
        let schema = RecordSchema {
            name: "Blank",
            fields: &[FieldDescriptor {
                member: "x",
                wire_name: "",
                kind: FieldKind::Primitive(PrimitiveKind::Boolean),
            }],
        };
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::EmptyWireName { member: "x", .. })
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Record("Tag").to_string(), "record:Tag");
        assert_eq!(
            FieldKind::Primitive(PrimitiveKind::Timestamp).to_string(),
            "timestamp"
        );
    }
}
