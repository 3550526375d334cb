//! # dlm-docs
//!
//! Reference documentation for event templates:
//! - [`markdown`]: one page per template file, or a merged page
//! - [`html`]: a searchable single page with example payloads
//! - [`lint`]: required fields missing from documented example payloads
//!
//! Rendering is pure; [`output`] writes the results to disk.

pub mod error;
pub mod html;
pub mod lint;
pub mod markdown;
pub mod output;
pub mod slug;

pub use error::DocsError;
pub use lint::{LintReport, lint_file, lint_files};
pub use output::{write_html, write_markdown, write_merged};
pub use slug::{escape_html, slugify};
