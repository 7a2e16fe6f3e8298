//! Service layer for task operations.
//!
//! `TaskService` wraps `TaskDb` (raw database access) together with the
//! settings the repos need. All task operations are implemented as
//! `impl TaskService` blocks under [`crate::repos`].

use tb_config::TaskboardConfig;
use tb_core::entities::DEFAULT_REWARD_TOKEN;
use tb_core::projection::DEFAULT_NETWORK_FEE;

use crate::TaskDb;
use crate::error::DatabaseError;
use crate::retry::RetryConfig;

/// Task operations over a shared database handle.
///
/// Every mutation is a single SQL statement. Accept and complete are
/// conditional updates, so the service needs no locks of its own and can be
/// shared behind an `Arc`.
pub struct TaskService {
    db: TaskDb,
    network_fee: f64,
    default_reward_token: String,
}

impl TaskService {
    /// Open the database named in `config` and apply its general settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrations fail.
    pub async fn open(config: &TaskboardConfig) -> Result<Self, DatabaseError> {
        let retry = RetryConfig::from(&config.database);
        let db = TaskDb::open_local_with_retry(&config.database.path, retry).await?;
        Ok(Self {
            db,
            network_fee: config.general.network_fee,
            default_reward_token: config.general.default_reward_token.clone(),
        })
    }

    /// Create a service over a local database with default settings.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TaskDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `TaskDb` (for testing).
    #[must_use]
    pub fn from_db(db: TaskDb) -> Self {
        Self {
            db,
            network_fee: DEFAULT_NETWORK_FEE,
            default_reward_token: DEFAULT_REWARD_TOKEN.to_string(),
        }
    }

    #[must_use]
    pub const fn with_network_fee(mut self, network_fee: f64) -> Self {
        self.network_fee = network_fee;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TaskDb {
        &self.db
    }

    /// Fee attached to every transaction history entry.
    #[must_use]
    pub const fn network_fee(&self) -> f64 {
        self.network_fee
    }

    /// Token used when a new task's reward names none.
    #[must_use]
    pub fn default_reward_token(&self) -> &str {
        &self.default_reward_token
    }
}
