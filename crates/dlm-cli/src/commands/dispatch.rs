use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Lint(args) => commands::lint::handle(&args, ctx, flags),
        Commands::Docs(args) => commands::docs::handle(&args, ctx, flags),
        Commands::Html(args) => commands::html::handle(&args, ctx, flags),
        Commands::Example(args) => commands::example::handle(&args, ctx, flags),
        Commands::Push(args) => commands::push::handle(&args, ctx, flags),
        Commands::Normalize(args) => commands::normalize::handle(&args, flags),
    }
}
