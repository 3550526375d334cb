use std::path::PathBuf;

use anyhow::Context;
use dlm_docs::{lint_files, write_markdown, write_merged};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DocsArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub written: Vec<String>,
    /// Required fields missing from documented examples, logged as warnings.
    pub missing: usize,
}

/// Handle `dlm docs`.
pub fn handle(args: &DocsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx)?;
    output(&response, flags.format)
}

pub fn run(args: &DocsArgs, ctx: &AppContext) -> anyhow::Result<DocsResponse> {
    let catalog = ctx.catalog(args.dir.as_deref())?;
    let missing = lint_files(catalog.files())
        .iter()
        .map(|report| report.missing.len())
        .sum();

    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.docs.out_dir));

    let written = if args.merge {
        vec![
            write_merged(catalog.files(), &out_dir, &ctx.config.docs.merged_file)
                .context("docs: failed to write merged documentation")?,
        ]
    } else {
        write_markdown(catalog.files(), &out_dir).context("docs: failed to write documentation")?
    };

    Ok(DocsResponse {
        written: written
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect(),
        missing,
    })
}
