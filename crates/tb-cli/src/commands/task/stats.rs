use tb_core::responses::StatsResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.service.task_stats().await?;
    let response = StatsResponse::new(stats);
    output(&response, std::slice::from_ref(&response.stats), flags.format)
}
