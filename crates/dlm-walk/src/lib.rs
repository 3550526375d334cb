//! # dlm-walk
//!
//! One recursive traversal over a template schema tree, driven by a
//! pluggable [`LeafPolicy`]. The three policies shipped here cover every
//! consumer of the template format:
//!
//! - [`merge_validate_normalize`]: builds the payload pushed to the data
//!   layer, failing fast on the first [`ValidationError`]
//! - [`fill_example`]: renders illustrative payloads for documentation,
//!   simplified or [`FillMode::Annotated`]
//! - [`audit_required`]: lists required fields an expected-structure
//!   example leaves out
//!
//! JSON `null` in any input tree is treated as absent.

pub mod audit;
pub mod engine;
pub mod error;
pub mod fill;
pub mod merge;
pub mod policy;

pub use audit::{AuditRequired, audit_required, audit_required_at};
pub use engine::Engine;
pub use error::ValidationError;
pub use fill::{FillExample, FillMode, descriptor, fill_example};
pub use merge::{MergeValidateNormalize, merge_validate_normalize};
pub use policy::{EmptyPolicy, LeafPolicy};
