use anyhow::Context;
use tb_config::TaskboardConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `tb serve`. Runs until the listener fails or the process is killed.
pub async fn handle(args: &ServeArgs, mut config: TaskboardConfig) -> anyhow::Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    config
        .validate()
        .context("invalid server configuration")?;

    tracing::info!(bind = %config.server.bind, db = %config.database.path, "starting taskboard API");
    tb_api::serve(&config)
        .await
        .with_context(|| format!("taskboard API on {} stopped", config.server.bind))
}
