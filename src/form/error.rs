use std::path::PathBuf;

use thiserror::Error;

/// A form-file entry that does not describe one of the renderable shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldShapeError {
    /// `tag` is none of input, select, textarea
    #[error("field '{name}': unknown tag '{tag}'")]
    UnknownTag { name: String, tag: String },

    /// `tag: input` with a subtype outside text/tel/email/radio/checkbox
    #[error("field '{name}': unsupported input type '{input_type}'")]
    UnknownInputType { name: String, input_type: String },

    /// `tag: input` without a `type`
    #[error("field '{name}': input has no type")]
    MissingInputType { name: String },

    /// Entry could not be decoded (missing key, wrong value type). `name` is
    /// the entry's name when it has one, else its 1-based position as `#N`.
    #[error("field '{name}': malformed entry: {reason}")]
    Malformed { name: String, reason: String },
}

impl FieldShapeError {
    pub fn field_name(&self) -> &str {
        match self {
            FieldShapeError::UnknownTag { name, .. }
            | FieldShapeError::UnknownInputType { name, .. }
            | FieldShapeError::MissingInputType { name }
            | FieldShapeError::Malformed { name, .. } => name,
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML form definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON form definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] FieldShapeError),
}
