//! # tb-config
//!
//! Layered configuration loading for Taskboard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKBOARD_*` prefix, `__` as separator)
//! 2. Project-level `.taskboard/config.toml`
//! 3. User-level `~/.config/taskboard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKBOARD_SERVER__BIND` -> `server.bind`,
//! `TASKBOARD_DATABASE__PATH` -> `database.path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tb_config::TaskboardConfig;
//!
//! let config = TaskboardConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.bind);
//! ```

mod database;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".taskboard/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskboardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TaskboardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` on the current directory (and its parents) before
    /// building the figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKBOARD_").split("__"))
    }

    /// Reject values that would only fail later at runtime.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBind` or `ConfigError::InvalidValue` for
    /// the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if self.database.path.trim().is_empty() {
            return Err(invalid("database.path", "must not be empty"));
        }
        if self.database.retry_attempts == 0 {
            return Err(invalid("database.retry_attempts", "must be at least 1"));
        }
        if !self.general.network_fee.is_finite() || self.general.network_fee < 0.0 {
            return Err(invalid(
                "general.network_fee",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskboard").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TaskboardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3030");
    }

    #[test]
    fn zero_retry_attempts_is_invalid() {
        let mut config = TaskboardConfig::default();
        config.database.retry_attempts = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("database.retry_attempts"));
    }

    #[test]
    fn negative_fee_is_invalid() {
        let mut config = TaskboardConfig::default();
        config.general.network_fee = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
