use tb_core::responses::TaskResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::status::parse_status;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    let task = ctx.service.update_status(id, status).await?;
    let response = TaskResponse::new("Task updated successfully", task);
    output(&response, std::slice::from_ref(&response.task), flags.format)
}
