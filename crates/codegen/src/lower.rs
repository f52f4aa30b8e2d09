//! Lowers a service model into the declarations to emit.

use std::collections::HashMap;

use crate::model::{MemberRef, Shape, ShapeType};
use crate::names::{member_name, type_name, variant_name};
use crate::{CodegenError, ServiceModel};

/// One emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Enum {
        name: String,
        doc: Option<String>,
        variants: Vec<Variant>,
    },
    Record {
        name: String,
        doc: Option<String>,
        fields: Vec<Field>,
    },
    Exception {
        name: String,
        code: String,
        doc: Option<String>,
        fields: Vec<Field>,
    },
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum { name, .. } | Self::Record { name, .. } | Self::Exception { name, .. } => {
                name
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub member: String,
    pub rust_type: String,
    /// Field kind as the mapper's record schema prints it, e.g.
    /// `list<record:ContactFlowSummary>`.
    pub kind: String,
    pub wire_name: String,
    pub doc: Option<String>,
}

/// Builds the declaration list in model order.
///
/// Exception structures drop their `message` member, which every exception
/// already carries. Members bound to the URI, headers or query string are
/// not part of the JSON body and are left out.
pub fn lower(model: &ServiceModel) -> Result<Vec<Item>, CodegenError> {
    let mut items = Vec::new();
    for (shape_name, shape) in &model.shapes {
        match shape.shape_type {
            ShapeType::String => {
                if let Some(values) = &shape.enum_values {
                    items.push(lower_enum(shape_name, shape, values)?);
                }
            }
            ShapeType::Structure if shape.exception => {
                let fields = lower_fields(model, shape_name, shape, true)?;
                let code = shape
                    .error
                    .as_ref()
                    .and_then(|e| e.code.clone())
                    .unwrap_or_else(|| shape_name.clone());
                items.push(Item::Exception {
                    name: type_name(shape_name),
                    code,
                    doc: doc_text(shape.documentation.as_deref()),
                    fields,
                });
            }
            ShapeType::Structure => {
                let fields = lower_fields(model, shape_name, shape, false)?;
                items.push(Item::Record {
                    name: type_name(shape_name),
                    doc: doc_text(shape.documentation.as_deref()),
                    fields,
                });
            }
            ShapeType::List | ShapeType::Map => {
                // validated where referenced; emitted inline as Vec / IndexMap
                member_type(model, shape_name, shape_name)?;
            }
            _ => {}
        }
    }
    check_unique(
        "service model",
        items.iter().map(|item| (item.name().to_owned(), item.name().to_owned())),
    )?;
    tracing::debug!(items = items.len(), "lowered service model");
    Ok(items)
}

fn lower_enum(shape_name: &str, shape: &Shape, values: &[String]) -> Result<Item, CodegenError> {
    let variants: Vec<Variant> = values
        .iter()
        .map(|value| Variant {
            name: variant_name(value),
            value: value.clone(),
        })
        .collect();
    check_unique(
        shape_name,
        variants.iter().map(|v| (v.name.clone(), v.value.clone())),
    )?;
    Ok(Item::Enum {
        name: type_name(shape_name),
        doc: doc_text(shape.documentation.as_deref()),
        variants,
    })
}

fn lower_fields(
    model: &ServiceModel,
    shape_name: &str,
    shape: &Shape,
    exception: bool,
) -> Result<Vec<Field>, CodegenError> {
    let mut fields = Vec::with_capacity(shape.members.len());
    for (name, member) in &shape.members {
        if let Some(location) = &member.location {
            tracing::debug!(
                shape = shape_name,
                member = name.as_str(),
                location = location.as_str(),
                "skipping non-body member"
            );
            continue;
        }
        let wire_name = member.location_name.clone().unwrap_or_else(|| name.clone());
        if exception && wire_name.eq_ignore_ascii_case("message") {
            continue;
        }
        let (rust_type, kind) = member_type(model, shape_name, &member.shape)?;
        fields.push(Field {
            member: member_name(name),
            rust_type,
            kind,
            wire_name,
            doc: doc_text(member.documentation.as_deref()),
        });
    }
    check_unique(
        shape_name,
        fields.iter().map(|f| (f.member.clone(), f.wire_name.clone())),
    )?;
    check_unique(
        shape_name,
        fields.iter().map(|f| (f.wire_name.clone(), f.member.clone())),
    )?;
    Ok(fields)
}

/// Rust type and schema kind of a member targeting `target`.
fn member_type(
    model: &ServiceModel,
    owner: &str,
    target: &str,
) -> Result<(String, String), CodegenError> {
    let shape = model
        .shapes
        .get(target)
        .ok_or_else(|| CodegenError::UnknownShape {
            shape: owner.to_owned(),
            target: target.to_owned(),
        })?;
    let reference = |field: &'static str, member: &Option<MemberRef>| {
        member
            .as_ref()
            .map(|m| m.shape.clone())
            .ok_or_else(|| CodegenError::MissingReference {
                shape: target.to_owned(),
                shape_type: shape.shape_type.as_str(),
                field,
            })
    };
    let primitive = |rust: &str, kind: &str| (rust.to_owned(), kind.to_owned());
    let resolved = match shape.shape_type {
        ShapeType::String if shape.is_enum() => {
            let name = type_name(target);
            let kind = format!("enum:{name}");
            (name, kind)
        }
        ShapeType::String => primitive("String", "string"),
        ShapeType::Integer => primitive("i32", "integer"),
        ShapeType::Long => primitive("i64", "long"),
        ShapeType::Float => primitive("f32", "float"),
        ShapeType::Double => primitive("f64", "double"),
        ShapeType::Boolean => primitive("bool", "boolean"),
        ShapeType::Timestamp => primitive("OffsetDateTime", "timestamp"),
        ShapeType::Structure if shape.exception => {
            return Err(CodegenError::ExceptionAsMember {
                shape: owner.to_owned(),
                target: target.to_owned(),
            })
        }
        ShapeType::Structure => {
            let name = type_name(target);
            let kind = format!("record:{name}");
            (name, kind)
        }
        ShapeType::List => {
            let element = reference("member", &shape.member)?;
            let (rust, kind) = member_type(model, target, &element)?;
            (format!("Vec<{rust}>"), format!("list<{kind}>"))
        }
        ShapeType::Map => {
            let key = reference("key", &shape.key)?;
            let key_shape = model
                .shapes
                .get(&key)
                .ok_or_else(|| CodegenError::UnknownShape {
                    shape: target.to_owned(),
                    target: key.clone(),
                })?;
            if key_shape.shape_type != ShapeType::String {
                return Err(CodegenError::NonStringMapKey {
                    shape: target.to_owned(),
                });
            }
            let value = reference("value", &shape.value)?;
            let (rust, kind) = member_type(model, target, &value)?;
            (format!("IndexMap<String, {rust}>"), format!("map<{kind}>"))
        }
        ShapeType::Blob => {
            return Err(CodegenError::UnsupportedShape {
                shape: target.to_owned(),
                shape_type: shape.shape_type.as_str(),
            })
        }
    };
    Ok(resolved)
}

/// Fails when two sources map to the same generated name.
fn check_unique(
    shape: &str,
    names: impl Iterator<Item = (String, String)>,
) -> Result<(), CodegenError> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for (name, source) in names {
        if let Some(first) = seen.get(&name) {
            return Err(CodegenError::NameCollision {
                shape: shape.to_owned(),
                name,
                first: first.clone(),
                second: source,
            });
        }
        seen.insert(name, source);
    }
    Ok(())
}

/// Plain-text documentation: markup tags removed, whitespace collapsed.
fn doc_text(html: Option<&str>) -> Option<String> {
    let html = html?;
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}
