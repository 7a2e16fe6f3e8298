mod accept;
mod complete;
mod create;
mod delete;
mod get;
mod list;
mod stats;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `tb task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            status,
            priority,
            category,
            assignee,
            creator,
            search,
        } => {
            let filters = list::ListFilters {
                status: status.as_deref(),
                priority: priority.as_deref(),
                category: category.as_deref(),
                assignee: assignee.as_deref(),
                creator: creator.as_deref(),
                search: search.as_deref(),
            };
            list::run(&filters, ctx, flags).await
        }
        TaskCommands::Get { id } => get::run(*id, ctx, flags).await,
        TaskCommands::Create(args) => create::run(args, ctx, flags).await,
        TaskCommands::Accept { id } => accept::run(*id, ctx, flags).await,
        TaskCommands::Complete { id } => complete::run(*id, ctx, flags).await,
        TaskCommands::Update { id, status } => update::run(*id, status, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        TaskCommands::Stats => stats::run(ctx, flags).await,
    }
}
