//! Renders lowered declarations as Rust source.

use std::fmt::Write;

use crate::lower::{Field, Item};
use crate::names::to_snake_case;

const TAB: &str = "    ";

fn format_doc(doc: Option<&str>, indent: &str) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    let mut out = String::new();
    for line in doc.lines() {
        let _ = writeln!(out, "{indent}/// {line}");
    }
    out
}

fn format_fields(fields: &[Field]) -> String {
    let mut out = String::new();
    for field in fields {
        let indent = format!("{TAB}{TAB}");
        out.push_str(&format_doc(field.doc.as_deref(), &indent));
        let _ = writeln!(
            out,
            "{indent}{}: {} => {:?},",
            field.member, field.rust_type, field.wire_name
        );
    }
    out
}

fn field_types(items: &[Item]) -> impl Iterator<Item = &str> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Record { fields, .. } | Item::Exception { fields, .. } => Some(fields),
            Item::Enum { .. } => None,
        })
        .flatten()
        .map(|f| f.rust_type.as_str())
}

/// Mapper items referenced by the generated module, in rustfmt order:
/// macros first, then types.
fn imports(items: &[Item]) -> Vec<&'static str> {
    let has = |pred: fn(&Item) -> bool| items.iter().any(pred);
    let has_enums = has(|i| matches!(i, Item::Enum { .. }));
    let has_records = has(|i| matches!(i, Item::Record { .. }));
    let has_exceptions = has(|i| matches!(i, Item::Exception { .. }));
    let uses = |needle: &str| field_types(items).any(|t| t.contains(needle));

    let mut out = Vec::new();
    if uses("IndexMap<") {
        out.push("IndexMap");
    }
    if uses("OffsetDateTime") {
        out.push("OffsetDateTime");
    }
    out.push("ErrorUnmarshallerRegistry");
    out.push("GenericErrorUnmarshaller");
    if has_enums {
        out.push("json_enum");
    }
    if has_records {
        out.push("json_record");
        out.push("Record");
    }
    out.push("RecordSchema");
    if has_exceptions {
        out.push("service_exception");
    }
    out.push("ServiceError");
    out.sort_by_key(|name| (name.starts_with(|c: char| c.is_ascii_uppercase()), *name));
    out
}

/// Renders one declaration as a macro invocation.
pub fn item_to_text(item: &Item) -> String {
    let mut out = String::new();
    match item {
        Item::Enum {
            name,
            doc,
            variants,
        } => {
            out.push_str("json_enum! {\n");
            out.push_str(&format_doc(doc.as_deref(), TAB));
            let _ = writeln!(out, "{TAB}pub enum {name} {{");
            for variant in variants {
                let _ = writeln!(out, "{TAB}{TAB}{} => {:?},", variant.name, variant.value);
            }
            let _ = writeln!(out, "{TAB}}}");
            out.push_str("}\n");
        }
        Item::Record { name, doc, fields } => {
            out.push_str("json_record! {\n");
            out.push_str(&format_doc(doc.as_deref(), TAB));
            let _ = writeln!(out, "{TAB}pub struct {name} {{");
            out.push_str(&format_fields(fields));
            let _ = writeln!(out, "{TAB}}}");
            out.push_str("}\n");
        }
        Item::Exception {
            name,
            code,
            doc,
            fields,
        } => {
            out.push_str("service_exception! {\n");
            out.push_str(&format_doc(doc.as_deref(), TAB));
            if fields.is_empty() {
                let _ = writeln!(out, "{TAB}pub struct {name} => {code:?} {{}}");
            } else {
                let _ = writeln!(out, "{TAB}pub struct {name} => {code:?} {{");
                out.push_str(&format_fields(fields));
                let _ = writeln!(out, "{TAB}}}");
            }
            let _ = writeln!(out, "{TAB}unmarshaller {name}Unmarshaller;");
            out.push_str("}\n");
        }
    }
    out
}

/// Renders a whole module: imports, declarations, the record table and
/// the error decoder chain.
pub fn module_to_text(service_name: &str, items: &[Item]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated from the {service_name} service model. Do not edit.");
    out.push('\n');
    let _ = writeln!(
        out,
        "use connect_sdk_json_mapper::{{{}}};",
        imports(items).join(", ")
    );

    for item in items {
        out.push('\n');
        out.push_str(&item_to_text(item));
    }

    out.push_str("\n/// Field tables of every record in this module.\n");
    out.push_str("pub const RECORD_SCHEMAS: &[RecordSchema] = &[\n");
    for item in items {
        if let Item::Record { name, .. } = item {
            let _ = writeln!(out, "{TAB}{name}::SCHEMA,");
        }
    }
    out.push_str("];\n");

    let exceptions: Vec<&str> = items
        .iter()
        .filter_map(|item| match item {
            Item::Exception { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    let registry_fn = format!("{}_error_registry", to_snake_case(service_name));
    out.push_str("\n/// Decoders for every modeled exception, then the generic fallback.\n");
    let _ = writeln!(out, "pub fn {registry_fn}<E>() -> ErrorUnmarshallerRegistry<E>");
    out.push_str("where\n");
    let _ = write!(out, "{TAB}E: From<ServiceError>");
    for name in &exceptions {
        let _ = write!(out, " + From<{name}>");
    }
    out.push_str(",\n{\n");
    let _ = writeln!(out, "{TAB}ErrorUnmarshallerRegistry::new()");
    for name in &exceptions {
        let _ = writeln!(out, "{TAB}{TAB}.with({name}Unmarshaller)");
    }
    let _ = writeln!(out, "{TAB}{TAB}.with(GenericErrorUnmarshaller)");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lower::Variant;

    #[test]
    fn test_enum_text() {
        let item = Item::Enum {
            name: "Channel".into(),
            doc: Some("Contact channel.".into()),
            variants: vec![
                Variant {
                    name: "Voice".into(),
                    value: "VOICE".into(),
                },
                Variant {
                    name: "Chat".into(),
                    value: "CHAT".into(),
                },
            ],
        };
        assert_eq!(
            item_to_text(&item),
            "json_enum! {\n    /// Contact channel.\n    pub enum Channel {\n        Voice => \"VOICE\",\n        Chat => \"CHAT\",\n    }\n}\n"
        );
    }

    #[test]
    fn test_empty_exception_text() {
        let item = Item::Exception {
            name: "ThrottlingException".into(),
            code: "ThrottlingException".into(),
            doc: None,
            fields: vec![],
        };
        assert_eq!(
            item_to_text(&item),
            "service_exception! {\n    pub struct ThrottlingException => \"ThrottlingException\" {}\n    unmarshaller ThrottlingExceptionUnmarshaller;\n}\n"
        );
    }

    #[test]
    fn test_wire_names_are_escaped() {
        let item = Item::Record {
            name: "Odd".into(),
            doc: None,
            fields: vec![Field {
                member: "quoted".into(),
                rust_type: "String".into(),
                kind: "string".into(),
                wire_name: "say \"hi\"".into(),
                doc: None,
            }],
        };
        assert!(item_to_text(&item).contains(r#"quoted: String => "say \"hi\"","#));
    }

    #[test]
    fn test_imports_follow_usage() {
        let items = vec![Item::Record {
            name: "R".into(),
            doc: None,
            fields: vec![Field {
                member: "tags".into(),
                rust_type: "IndexMap<String, String>".into(),
                kind: "map<string>".into(),
                wire_name: "Tags".into(),
                doc: None,
            }],
        }];
        assert_eq!(
            imports(&items),
            [
                "json_record",
                "ErrorUnmarshallerRegistry",
                "GenericErrorUnmarshaller",
                "IndexMap",
                "Record",
                "RecordSchema",
                "ServiceError",
            ]
        );
    }
}
