use anyhow::Context;
use tb_config::TaskboardConfig;
use tb_db::TaskService;

/// Shared application resources for the local task commands.
pub struct AppContext {
    pub service: TaskService,
}

impl AppContext {
    /// Open the task store named in `config`.
    pub async fn init(config: &TaskboardConfig) -> anyhow::Result<Self> {
        let service = TaskService::open(config).await.with_context(|| {
            format!("failed to open task database at {}", config.database.path)
        })?;
        Ok(Self { service })
    }
}
