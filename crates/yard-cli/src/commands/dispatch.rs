use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::run(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::run(&args.uid, ctx, flags).await,
        Commands::Compare(args) => commands::compare::run(&args.uids, ctx, flags).await,
    }
}
