use dlm_core::normalize;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    pub input: String,
    pub normalized: String,
}

/// Handle `dlm normalize`. Needs no configuration or templates.
pub fn handle(args: &NormalizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(&args.text), flags.format)
}

pub fn run(texts: &[String]) -> Vec<NormalizedText> {
    texts
        .iter()
        .map(|input| NormalizedText {
            input: input.clone(),
            normalized: normalize(input),
        })
        .collect()
}
