//! Service-model document: a `shapes` map keyed by shape name.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::CodegenError;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceModel {
    #[serde(default)]
    pub metadata: Metadata,
    pub shapes: IndexMap<String, Shape>,
}

impl ServiceModel {
    pub fn from_json(input: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub service_id: Option<String>,
    pub protocol: Option<String>,
    pub json_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Structure,
    List,
    Map,
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Timestamp,
    Blob,
}

impl ShapeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::List => "list",
            Self::Map => "map",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Blob => "blob",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    #[serde(default)]
    pub members: IndexMap<String, MemberRef>,
    pub member: Option<MemberRef>,
    pub key: Option<MemberRef>,
    pub value: Option<MemberRef>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default)]
    pub exception: bool,
    pub error: Option<ErrorInfo>,
    pub documentation: Option<String>,
}

impl Shape {
    pub fn is_enum(&self) -> bool {
        self.shape_type == ShapeType::String && self.enum_values.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub shape: String,
    /// Wire-name override.
    pub location_name: Option<String>,
    /// `uri`, `header`, `querystring`; absent for body members.
    pub location: Option<String>,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub code: Option<String>,
    pub http_status_code: Option<u16>,
}
