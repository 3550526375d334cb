//! Template parsing and loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing or loading template schema trees.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A node is neither a recognizable leaf, branch, nor list.
    #[error("malformed template at '{path}': {reason}")]
    MalformedTemplate { path: String, reason: String },

    /// A template file's top level is not an object of events.
    #[error("template file '{file}' must contain a JSON object of events")]
    NotAnObject { file: String },

    /// The file could not be read.
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse template file '{file}': {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A template file parsed as JSON but its contents are not a valid template.
    #[error("invalid template file '{file}': {source}")]
    InvalidFile {
        file: String,
        #[source]
        source: Box<SchemaError>,
    },

    /// The directory contains no `*.json` template files.
    #[error("no JSON template files found in {0}")]
    NoTemplates(PathBuf),
}

impl SchemaError {
    pub(crate) fn malformed(path: &crate::FieldPath, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
