use std::path::Path;

use dlm_docs::{LintReport, lint_files};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LintArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct LintResponse {
    pub files: usize,
    pub missing: usize,
    pub reports: Vec<LintReport>,
}

/// Handle `dlm lint`. Missing fields are warnings; the command still
/// succeeds.
pub fn handle(args: &LintArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(ctx, args.dir.as_deref())?;
    output(&response, flags.format)
}

pub fn run(ctx: &AppContext, dir: Option<&Path>) -> anyhow::Result<LintResponse> {
    let catalog = ctx.catalog(dir)?;
    let reports = lint_files(catalog.files());
    Ok(LintResponse {
        files: reports.len(),
        missing: reports.iter().map(|report| report.missing.len()).sum(),
        reports,
    })
}

#[cfg(test)]
mod tests {
    use dlm_config::DlmConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::test_support::write_templates;

    #[test]
    fn reports_missing_fields_from_expected_structure() {
        let dir = TempDir::new().unwrap();
        write_templates(dir.path());
        let ctx = AppContext::with_config(DlmConfig::default());

        let response = run(&ctx, Some(dir.path())).unwrap();

        assert_eq!(response.files, 1);
        assert_eq!(response.missing, 2);
        assert_eq!(
            response.reports[0].missing,
            vec!["add_to_cart.ecommerce.currency", "add_to_cart.ecommerce.value"]
        );
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::with_config(DlmConfig::default());
        let err = run(&ctx, Some(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load templates"));
    }
}
