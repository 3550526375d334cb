//! Payload validation errors.

use dlm_core::JsonKind;
use dlm_schema::LeafType;
use thiserror::Error;

/// Why a caller-supplied payload was rejected.
///
/// These describe a caller input defect; retrying with the same input fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required leaf had no usable value and no default.
    #[error("missing required field \"{path}\" for event \"{event}\"")]
    MissingRequiredField { path: String, event: String },

    /// A value's runtime type disagrees with the leaf's declared type.
    #[error(
        "type mismatch for \"{path}\" in event \"{event}\": expected \"{expected}\", got \"{actual}\""
    )]
    TypeMismatch {
        path: String,
        event: String,
        expected: LeafType,
        actual: JsonKind,
    },
}

impl ValidationError {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequiredField { path, .. } | Self::TypeMismatch { path, .. } => path,
        }
    }

    #[must_use]
    pub fn event(&self) -> &str {
        match self {
            Self::MissingRequiredField { event, .. } | Self::TypeMismatch { event, .. } => event,
        }
    }
}
