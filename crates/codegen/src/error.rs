use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to parse service model: {0}")]
    Model(#[from] serde_json::Error),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shape `{shape}` references unknown shape `{target}`")]
    UnknownShape { shape: String, target: String },
    #[error("shape `{shape}` has unsupported type `{shape_type}`")]
    UnsupportedShape {
        shape: String,
        shape_type: &'static str,
    },
    #[error("{shape_type} shape `{shape}` has no `{field}` reference")]
    MissingReference {
        shape: String,
        shape_type: &'static str,
        field: &'static str,
    },
    #[error("map shape `{shape}` must have string keys")]
    NonStringMapKey { shape: String },
    #[error("shape `{shape}` uses exception `{target}` as a member")]
    ExceptionAsMember { shape: String, target: String },
    #[error("`{first}` and `{second}` both become `{name}` in shape `{shape}`")]
    NameCollision {
        shape: String,
        name: String,
        first: String,
        second: String,
    },
}
