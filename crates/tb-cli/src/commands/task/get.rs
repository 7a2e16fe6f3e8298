use tb_core::responses::TaskResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.service.get_task(id).await?;
    let response = TaskResponse::new("Task found", task);
    output(&response, std::slice::from_ref(&response.task), flags.format)
}
