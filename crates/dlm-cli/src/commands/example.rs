use std::path::Path;

use anyhow::Context;
use dlm_walk::{FillMode, fill_example};
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExampleArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dlm example`.
pub fn handle(args: &ExampleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = if args.annotated {
        FillMode::Annotated
    } else {
        FillMode::Simplified
    };
    let payload = run(ctx, args.dir.as_deref(), &args.event, mode)?;
    output(&payload, flags.format)
}

/// Fill the template for `event`, seeded with its documented expected
/// structure when it has one.
pub fn run(
    ctx: &AppContext,
    dir: Option<&Path>,
    event: &str,
    mode: FillMode,
) -> anyhow::Result<Value> {
    let catalog = ctx.catalog(dir)?;
    let template = catalog
        .get(event)
        .with_context(|| format!("event \"{event}\" not found in templates"))?;
    Ok(fill_example(
        template.schema(),
        template.expected_structure(),
        mode,
    ))
}
