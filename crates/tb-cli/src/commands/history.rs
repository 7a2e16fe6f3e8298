use tb_core::responses::TransactionHistoryResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tb history`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut entries = ctx.service.transaction_history().await?;
    if let Some(limit) = flags.limit {
        entries.truncate(usize::try_from(limit)?);
    }

    let response = TransactionHistoryResponse::new(entries);
    output(&response, &response.transactions, flags.format)
}
