//! Completeness checks of `docs.structureExpected` against templates.

use dlm_schema::{FieldPath, TemplateFile};
use dlm_walk::audit_required_at;
use serde::Serialize;

/// Required fields missing from one file's documented examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub file: String,
    /// Paths prefixed with the event name, e.g. `purchase.ecommerce.value`.
    pub missing: Vec<String>,
}

impl LintReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Audit every event of `file` that documents an expected structure.
/// Events without one are skipped.
#[must_use]
pub fn lint_file(file: &TemplateFile) -> LintReport {
    let missing = file
        .events()
        .iter()
        .filter_map(|event| {
            let expected = event.expected_structure()?;
            Some(audit_required_at(
                event.schema(),
                expected,
                &FieldPath::named(event.name()),
            ))
        })
        .flatten()
        .collect::<Vec<_>>();

    for path in &missing {
        tracing::warn!(file = file.file_name(), field = %path, "required field missing from expected structure");
    }

    LintReport {
        file: file.file_name().to_string(),
        missing,
    }
}

#[must_use]
pub fn lint_files(files: &[TemplateFile]) -> Vec<LintReport> {
    files.iter().map(lint_file).collect()
}
