//! Cross-cutting error types for Taskboard.
//!
//! This module defines the domain errors raised by the state machine and the
//! request validation. Storage errors (`DatabaseError`) live in `tb-db` and the
//! HTTP mapping lives in `tb-api`; both classify themselves with [`ErrorKind`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::enums::TaskStatus;

/// Errors raised by domain validation and transition guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Request data failed validation (missing fields, bad values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// No task exists with this id.
    #[error("Task not found: {id}")]
    NotFound { id: i64 },

    /// The transition was rejected because of the task's current state.
    #[error(transparent)]
    Conflict(#[from] ConflictKind),
}

impl CoreError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
        }
    }
}

/// Why a transition lost against the task's current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictKind {
    /// Accept on a task that already has an assignee.
    #[error("Task already assigned to: {assignee}")]
    AlreadyAssigned { assignee: String },

    /// Accept on a task whose status is not `open`.
    #[error("Task not available. Current status: {status}")]
    InvalidStatus { status: TaskStatus },

    /// Complete by someone other than the assignee.
    #[error("Task is not assigned to you")]
    NotOwner,

    /// Complete on a task whose status is not `in_progress`.
    #[error("Task is not in progress. Current status: {status}")]
    NotInProgress { status: TaskStatus },
}

impl ConflictKind {
    /// Stable machine-readable code for API clients.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AlreadyAssigned { .. } => "already_assigned",
            Self::InvalidStatus { .. } => "invalid_status",
            Self::NotOwner => "not_owner",
            Self::NotInProgress { .. } => "not_in_progress",
        }
    }
}

/// Error taxonomy shared across crates.
///
/// Clients use it to decide whether retrying makes sense: a conflict will fail
/// again, a storage failure may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Storage,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Storage => "storage",
        }
    }

    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Storage)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
