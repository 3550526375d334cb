//! Append-only destinations for accepted payloads.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SinkError;

/// The single capability the dispatcher needs from the outside world.
pub trait EventSink: Send + Sync {
    /// Append one validated payload.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the payload could not be stored.
    fn append(&self, payload: &Value) -> Result<(), SinkError>;
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn append(&self, payload: &Value) -> Result<(), SinkError> {
        (**self).append(payload)
    }
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn append(&self, payload: &Value) -> Result<(), SinkError> {
        (**self).append(payload)
    }
}

/// In-process queue, the equivalent of a page's `dataLayer` array.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Value>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every payload appended so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<Value> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn append(&self, payload: &Value) -> Result<(), SinkError> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
        Ok(())
    }
}

/// One line of a JSONL event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub ts: DateTime<Utc>,
    /// The payload's `event` field, or empty when it has none.
    pub event: String,
    pub payload: Value,
}

impl LoggedEvent {
    #[must_use]
    pub fn now(payload: Value) -> Self {
        let event = payload
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self {
            ts: Utc::now(),
            event,
            payload,
        }
    }
}

/// Appends [`LoggedEvent`] lines to a file, one JSON document per line.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a sink writing to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every logged event. A missing file is an empty log.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] on read failures or malformed lines.
    pub fn read_all(&self) -> Result<Vec<LoggedEvent>, SinkError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines::<LoggedEvent, _>(&self.path)
            .and_then(|lines| lines.collect::<std::io::Result<Vec<_>>>())
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl EventSink for JsonlSink {
    fn append(&self, payload: &Value) -> Result<(), SinkError> {
        let line = LoggedEvent::now(payload.clone());
        serde_jsonlines::append_json_lines(&self.path, [&line])
            .map_err(|source| self.io_error(source))
    }
}
