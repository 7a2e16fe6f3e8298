//! Database error types for tb-db.

use tb_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A domain rule rejected the operation (validation, not found, conflict).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Classify for clients: domain errors keep their kind, everything else is storage.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(err) => err.kind(),
            _ => ErrorKind::Storage,
        }
    }

    /// The domain error, if this is one.
    #[must_use]
    pub const fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tb_core::ConflictKind> for DatabaseError {
    fn from(conflict: tb_core::ConflictKind) -> Self {
        Self::Core(CoreError::Conflict(conflict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::ConflictKind;

    #[test]
    fn conflict_is_not_storage() {
        let err = DatabaseError::from(ConflictKind::NotOwner);
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(!err.kind().is_retryable());
    }

    #[test]
    fn non_domain_errors_are_storage() {
        assert_eq!(DatabaseError::NoResult.kind(), ErrorKind::Storage);
        assert_eq!(
            DatabaseError::Query("boom".into()).kind(),
            ErrorKind::Storage
        );
        assert!(DatabaseError::Migration("x".into()).kind().is_retryable());
    }
}
