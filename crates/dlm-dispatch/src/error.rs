//! Dispatch error types.

use std::path::PathBuf;

use dlm_walk::ValidationError;
use thiserror::Error;

/// Failure to write to or read from an event sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("event log {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No template is registered under the requested key.
    #[error("event \"{0}\" not found in templates")]
    UnknownEvent(String),

    /// The caller's parameters do not satisfy the template.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payload was valid but could not be appended.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl DispatchError {
    /// Whether the error was caused by caller input and retrying with the
    /// same input cannot succeed.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownEvent(_) | Self::Validation(_))
    }
}
