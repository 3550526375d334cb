use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check documented example payloads for missing required fields.
    Lint(LintArgs),
    /// Write Markdown reference pages.
    Docs(DocsArgs),
    /// Write the single-page HTML reference.
    Html(HtmlArgs),
    /// Print an example payload for one event.
    Example(ExampleArgs),
    /// Validate parameters against an event template and append the payload
    /// to the event log.
    Push(PushArgs),
    /// Print the normalized form of each argument.
    Normalize(NormalizeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LintArgs {
    /// Templates directory (defaults to `general.templates_dir`)
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DocsArgs {
    /// Templates directory (defaults to `general.templates_dir`)
    pub dir: Option<PathBuf>,
    /// Output directory (defaults to `docs.out_dir`)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Write a single merged file instead of one per template file
    #[arg(long)]
    pub merge: bool,
}

#[derive(Clone, Debug, Args)]
pub struct HtmlArgs {
    /// Templates directory (defaults to `general.templates_dir`)
    pub dir: Option<PathBuf>,
    /// Output file (defaults to `docs.out_dir`/`docs.html_file`)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Page title (defaults to `docs.title`)
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExampleArgs {
    /// Event key as declared in the templates
    pub event: String,
    /// Templates directory (defaults to `general.templates_dir`)
    pub dir: Option<PathBuf>,
    /// Show type descriptors instead of values
    #[arg(long)]
    pub annotated: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PushArgs {
    /// Event key as declared in the templates
    pub event: String,
    /// Templates directory (defaults to `general.templates_dir`)
    pub dir: Option<PathBuf>,
    /// Event parameters as a JSON object
    #[arg(long, default_value = "{}")]
    pub params: String,
    /// Page path used to classify the event
    #[arg(long, default_value = "/")]
    pub page: String,
    /// JSONL event log (defaults to `dispatch.event_log`)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    #[arg(required = true)]
    pub text: Vec<String>,
}
