use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use dlm_docs::write_html;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HtmlArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct HtmlResponse {
    pub written: String,
    pub events: usize,
}

/// Handle `dlm html`.
pub fn handle(args: &HtmlArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)
}

pub fn run(args: &HtmlArgs, ctx: &AppContext) -> anyhow::Result<HtmlResponse> {
    let catalog = ctx.catalog(args.dir.as_deref())?;
    let docs = &ctx.config.docs;
    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&docs.out_dir).join(&docs.html_file));
    let title = args.title.as_deref().unwrap_or(&docs.title);

    write_html(catalog.files(), &path, title, Utc::now())
        .context("html: failed to write documentation page")?;

    Ok(HtmlResponse {
        written: path.to_string_lossy().to_string(),
        events: catalog.files().iter().map(|file| file.events().len()).sum(),
    })
}

#[cfg(test)]
mod tests {
    use dlm_config::DlmConfig;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::test_support::write_templates;

    #[test]
    fn writes_page_to_requested_file() {
        let dir = TempDir::new().unwrap();
        write_templates(dir.path());
        let out = dir.path().join("public").join("events.html");
        let args = HtmlArgs {
            dir: Some(dir.path().to_path_buf()),
            out: Some(out.clone()),
            title: Some("Cart events".into()),
        };

        let response = run(&args, &AppContext::with_config(DlmConfig::default())).unwrap();

        assert_eq!(response.events, 1);
        let page = std::fs::read_to_string(out).unwrap();
        assert!(page.contains("<title>Cart events</title>"));
    }
}
