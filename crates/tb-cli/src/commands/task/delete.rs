use tb_core::responses::MessageResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_message;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_task(id).await?;
    output_message(&MessageResponse::ok("Task deleted successfully"), flags.format)
}
