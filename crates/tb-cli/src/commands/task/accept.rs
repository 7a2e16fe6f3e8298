use tb_core::responses::TaskResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::caller::require_caller;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = require_caller(flags)?;
    let task = ctx.service.accept_task(id, caller).await?;
    let response = TaskResponse::new("Task accepted successfully", task);
    output(&response, std::slice::from_ref(&response.task), flags.format)
}
