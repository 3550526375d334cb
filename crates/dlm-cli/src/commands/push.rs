use std::path::PathBuf;

use anyhow::Context;
use dlm_dispatch::{Dispatcher, JsonlSink, Receipt};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PushArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dlm push`. A rejected event exits non-zero and leaves the log
/// untouched.
pub fn handle(args: &PushArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let receipt = run(args, ctx)?;
    output(&receipt, flags.format)
}

pub fn run(args: &PushArgs, ctx: &AppContext) -> anyhow::Result<Receipt> {
    let params: Value =
        serde_json::from_str(&args.params).context("push: --params must be valid JSON")?;
    let catalog = ctx.catalog(args.dir.as_deref())?;

    let log = args
        .log
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.dispatch.event_log));
    let sink = JsonlSink::new(log).context("push: failed to open event log")?;

    let dispatcher = Dispatcher::new(catalog, sink, &ctx.config.dispatch);
    dispatcher
        .push(&args.event, &params, &args.page)
        .with_context(|| format!("push: event \"{}\" rejected", args.event))
}
