//! # dlm-schema
//!
//! Template schema trees for the data layer manager.
//!
//! This crate provides:
//! - [`SchemaNode`]: the tagged `Leaf | Branch | List` tree, classified once
//!   at parse time
//! - [`FieldPath`]: dotted/indexed paths used in errors and audit output
//! - [`TemplateCatalog`]: event templates loaded from JSON files and
//!   shallow-merged by event name
//!
//! Traversals over these trees live in `dlm-walk`.

pub mod catalog;
pub mod docs;
pub mod error;
pub mod node;
pub mod path;

pub use catalog::{EventTemplate, TemplateCatalog, TemplateFile};
pub use docs::Docs;
pub use error::SchemaError;
pub use node::{Branch, DOCS_KEY, LEAF_KEYS, Leaf, LeafType, List, NodeKind, SchemaNode, classify};
pub use path::FieldPath;
