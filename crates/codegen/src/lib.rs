//! Generates mapper declarations from a JSON service model.
//!
//! The model is lowered into enums, records and exceptions, then rendered
//! as `json_enum!`, `json_record!` and `service_exception!` invocations
//! together with the module's record table and error decoder chain.
//!
//! ```
//! use connect_sdk_codegen::{generate_from_str, GenerateOptions};
//!
//! let model = r#"{"shapes":{
//!     "QueueReference":{"type":"structure","members":{"Id":{"shape":"QueueId"}}},
//!     "QueueId":{"type":"string"}
//! }}"#;
//! let source = generate_from_str(model, &GenerateOptions::new("Connect")).unwrap();
//! assert!(source.contains(r#"id: String => "Id","#));
//! ```

mod error;
pub mod lower;
pub mod model;
pub mod names;
pub mod render;

pub use error::CodegenError;
pub use lower::{lower, Field, Item, Variant};
pub use model::{ServiceModel, Shape, ShapeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Used in the header comment and the registry function name.
    pub service_name: String,
}

impl GenerateOptions {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new("Connect")
    }
}

/// Renders Rust source for every enum, record and exception of `model`.
pub fn generate(model: &ServiceModel, options: &GenerateOptions) -> Result<String, CodegenError> {
    let items = lower(model)?;
    tracing::info!(
        service = options.service_name.as_str(),
        shapes = model.shapes.len(),
        declarations = items.len(),
        "generated declarations"
    );
    Ok(render::module_to_text(&options.service_name, &items))
}

pub fn generate_from_str(input: &str, options: &GenerateOptions) -> Result<String, CodegenError> {
    generate(&ServiceModel::from_json(input)?, options)
}
