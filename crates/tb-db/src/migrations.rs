//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. Every statement is safe to re-run.

use crate::TaskDb;
use crate::error::DatabaseError;

/// Tasks table and its indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");
/// Rewrites legacy status/assignee sentinels to their canonical form.
const MIGRATION_002: &str = include_str!("../migrations/002_normalize_legacy.sql");

impl TaskDb {
    /// Run all embedded migrations in sequence.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` naming the failing migration.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_normalize_legacy: {e}")))?;
        Ok(())
    }
}
