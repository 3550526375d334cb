//! Template files and the merged event catalog.
//!
//! A template file is a JSON object mapping event names to event templates.
//! The [`TemplateCatalog`] shallow-merges any number of files: when two files
//! declare the same event, the later one wins.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::docs::Docs;
use crate::error::SchemaError;
use crate::node::{Branch, SchemaNode};
use crate::path::FieldPath;

/// Key of the leaf whose default names the event on the wire.
const EVENT_FIELD: &str = "event";

/// One named event template.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTemplate {
    name: String,
    schema: SchemaNode,
}

impl EventTemplate {
    /// Parse the template stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedTemplate`] if the value is not an object
    /// of fields or any nested node is malformed.
    pub fn parse(name: &str, value: &Value) -> Result<Self, SchemaError> {
        let path = FieldPath::named(name);
        let schema = SchemaNode::parse_at(value, &path)?;
        if schema.as_branch().is_none() {
            return Err(SchemaError::malformed(
                &path,
                "an event template must be an object of fields",
            ));
        }
        Ok(Self {
            name: name.to_string(),
            schema,
        })
    }

    /// Catalog key of this template.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template tree; always a branch.
    #[must_use]
    pub const fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    #[must_use]
    pub fn branch(&self) -> Option<&Branch> {
        self.schema.as_branch()
    }

    #[must_use]
    pub fn docs(&self) -> Option<&Docs> {
        self.branch().and_then(Branch::docs)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.docs().and_then(|docs| docs.description.as_deref())
    }

    #[must_use]
    pub fn expected_structure(&self) -> Option<&Value> {
        self.docs().and_then(|docs| docs.structure_expected.as_ref())
    }

    /// Event name used in validation errors: the string default of a
    /// top-level `event` leaf when declared, else the catalog key.
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.branch()
            .and_then(|branch| branch.get(EVENT_FIELD))
            .and_then(SchemaNode::as_leaf)
            .and_then(|leaf| leaf.default.as_ref())
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }
}

/// The events declared by a single template file, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    file_name: String,
    events: Vec<EventTemplate>,
}

impl TemplateFile {
    /// Parse an already-decoded template file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotAnObject`] if the top level is not an object,
    /// or the first event's parse error.
    pub fn parse(file_name: &str, value: &Value) -> Result<Self, SchemaError> {
        let map = value.as_object().ok_or_else(|| SchemaError::NotAnObject {
            file: file_name.to_string(),
        })?;

        let events = map
            .iter()
            .map(|(name, template)| EventTemplate::parse(name, template))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| SchemaError::InvalidFile {
                file: file_name.to_string(),
                source: Box::new(source),
            })?;

        Ok(Self {
            file_name: file_name.to_string(),
            events,
        })
    }

    /// Decode and parse JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] for invalid JSON, otherwise see
    /// [`TemplateFile::parse`].
    pub fn from_json_str(file_name: &str, json: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(json).map_err(|source| SchemaError::Json {
            file: file_name.to_string(),
            source,
        })?;
        Self::parse(file_name, &value)
    }

    /// Read and parse a template file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] if the file cannot be read, otherwise see
    /// [`TemplateFile::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let raw = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        let file = Self::from_json_str(&file_name, &raw)?;
        tracing::debug!(file = %file_name, events = file.events.len(), "loaded template file");
        Ok(file)
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn events(&self) -> &[EventTemplate] {
        &self.events
    }
}

/// Events from every loaded template file, shallow-merged by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    files: Vec<TemplateFile>,
    events: Vec<EventTemplate>,
    index: HashMap<String, usize>,
}

impl TemplateCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge files in order; later files override earlier events.
    #[must_use]
    pub fn from_files(files: impl IntoIterator<Item = TemplateFile>) -> Self {
        let mut catalog = Self::new();
        for file in files {
            catalog.add_file(file);
        }
        catalog
    }

    /// Load every `*.json` file in `dir`, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] if the directory cannot be listed,
    /// [`SchemaError::NoTemplates`] if it holds no JSON files, or the first
    /// file's load error.
    pub fn load_dir(dir: &Path) -> Result<Self, SchemaError> {
        let io_err = |source| SchemaError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(SchemaError::NoTemplates(dir.to_path_buf()));
        }
        paths.sort();

        let files = paths
            .iter()
            .map(|path| TemplateFile::load(path))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_files(files))
    }

    /// Add a file, overriding same-named events already in the catalog.
    pub fn add_file(&mut self, file: TemplateFile) {
        for event in file.events() {
            if let Some(&slot) = self.index.get(event.name()) {
                tracing::warn!(
                    event = event.name(),
                    file = file.file_name(),
                    "event template redefined; later definition wins"
                );
                self.events[slot] = event.clone();
            } else {
                self.index.insert(event.name().to_string(), self.events.len());
                self.events.push(event.clone());
            }
        }
        self.files.push(file);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EventTemplate> {
        self.index.get(name).map(|&slot| &self.events[slot])
    }

    /// Merged events, in first-declaration order.
    #[must_use]
    pub fn events(&self) -> &[EventTemplate] {
        &self.events
    }

    /// Source files as loaded, before merging.
    #[must_use]
    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.events.iter().map(EventTemplate::name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
