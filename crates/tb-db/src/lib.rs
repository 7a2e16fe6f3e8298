//! # tb-db
//!
//! libSQL storage for Taskboard tasks.
//!
//! [`TaskDb`] owns the database handle, runs the embedded migrations and
//! retries statements that hit a transient lock. [`service::TaskService`]
//! layers the task operations on top: creation, listing, the conditional
//! accept/complete transitions and the transaction-log projection.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;
use retry::{RetryConfig, is_transient_error};

pub use repos::task::TaskFilter;
pub use service::TaskService;

/// In-memory database path, used by tests and `tb --db :memory:`.
pub const IN_MEMORY: &str = ":memory:";

/// Central database handle for task storage.
///
/// Wraps a libSQL database and a single shared connection. The connection is
/// safe to share across tasks; `SQLite` serializes the writes.
pub struct TaskDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    retry: RetryConfig,
}

impl TaskDb {
    /// Open a local database at the given path with default retry settings.
    ///
    /// Creates the parent directory if needed and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with_retry(path, RetryConfig::default()).await
    }

    /// Open a local database with explicit retry settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open_local_with_retry(
        path: &str,
        retry: RetryConfig,
    ) -> Result<Self, DatabaseError> {
        if path != IN_MEMORY {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DatabaseError::InvalidState(format!(
                            "cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let task_db = Self { db, conn, retry };
        task_db.run_migrations().await?;
        tracing::debug!(path, "task database ready");
        Ok(task_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Execute a statement, retrying transient lock errors.
    ///
    /// `params` is a closure because libSQL consumes the parameters on each
    /// attempt. Returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` for non-transient failures or once the
    /// attempts are exhausted.
    pub async fn execute_with<F, P>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.execute(sql, params()).await {
                Ok(affected) => return Ok(affected),
                Err(e) if attempt < self.retry.max_attempts && is_transient_error(&e) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(attempt, ?delay, error = %e, "database busy, retrying statement");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Run a query, retrying transient lock errors.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` for non-transient failures or once the
    /// attempts are exhausted.
    pub async fn query_with<F, P>(&self, sql: &str, params: F) -> Result<libsql::Rows, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.query(sql, params()).await {
                Ok(rows) => return Ok(rows),
                Err(e) if attempt < self.retry.max_attempts && is_transient_error(&e) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(attempt, ?delay, error = %e, "database busy, retrying query");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
