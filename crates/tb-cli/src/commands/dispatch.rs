use anyhow::Context;
use tb_config::TaskboardConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `serve` hands the config to the HTTP server, which opens its own store;
/// every other command runs against a local `AppContext`.
pub async fn dispatch(
    command: Commands,
    config: TaskboardConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Task { action } => {
            let ctx = open_context(config).await?;
            commands::task::handle(&action, &ctx, flags).await
        }
        Commands::History => {
            let ctx = open_context(config).await?;
            commands::history::handle(&ctx, flags).await
        }
    }
}

async fn open_context(config: TaskboardConfig) -> anyhow::Result<AppContext> {
    AppContext::init(&config)
        .await
        .context("failed to initialize taskboard application context")
}

#[cfg(test)]
mod tests {
    use tb_config::TaskboardConfig;

    use super::dispatch;
    use crate::cli::root_commands::{Commands, ServeArgs};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            db: None,
            caller: None,
        }
    }

    fn in_memory_config() -> TaskboardConfig {
        let mut config = TaskboardConfig::default();
        config.database.path = ":memory:".into();
        config
    }

    #[tokio::test]
    async fn serve_applies_bind_override_before_starting() {
        let command = Commands::Serve(ServeArgs {
            bind: Some("not-an-address".into()),
        });
        let err = dispatch(command, in_memory_config(), &flags())
            .await
            .expect_err("invalid bind should stop serve");
        assert!(format!("{err:#}").contains("server.bind"));
    }

    #[tokio::test]
    async fn local_commands_open_the_configured_store() {
        dispatch(Commands::History, in_memory_config(), &flags())
            .await
            .expect("history on an empty store should succeed");
    }
}
