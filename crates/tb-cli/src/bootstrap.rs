use anyhow::Context;
use tb_config::TaskboardConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env` support) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TaskboardConfig> {
    let mut config =
        TaskboardConfig::load_with_dotenv().context("failed to load taskboard configuration")?;

    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    config
        .validate()
        .context("invalid configuration after applying command-line overrides")?;

    tracing::debug!(db = %config.database.path, bind = %config.server.bind, "configuration loaded");
    Ok(config)
}
