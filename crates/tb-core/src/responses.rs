//! JSON response envelopes.
//!
//! Every response carries a `success` flag and a human-readable `message`, the
//! shape the dashboard already consumes. The HTTP API and the `tb` CLI both
//! render these.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Task, TaskStats, TransactionEntry};
use crate::errors::ErrorKind;

/// Response for `GET /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TaskListResponse {
    pub success: bool,
    pub message: String,
    pub tasks: Vec<Task>,
}

/// Response for any operation returning a single task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TaskResponse {
    pub success: bool,
    pub message: String,
    pub task: Task,
}

/// Response for `GET /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TransactionHistoryResponse {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub transactions: Vec<TransactionEntry>,
}

/// Response for `GET /tasks/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub success: bool,
    pub message: String,
    pub stats: TaskStats,
}

/// Response carrying only the outcome, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Machine-readable part of a failed response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    /// Conflict code such as `already_assigned`, when the kind is `conflict`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub retryable: bool,
}

/// Response for any failed operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: ErrorDetail,
}

impl TaskListResponse {
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            success: true,
            message: format!("{} task(s)", tasks.len()),
            tasks,
        }
    }
}

impl TaskResponse {
    #[must_use]
    pub fn new(message: impl Into<String>, task: Task) -> Self {
        Self {
            success: true,
            message: message.into(),
            task,
        }
    }
}

impl TransactionHistoryResponse {
    #[must_use]
    pub fn new(transactions: Vec<TransactionEntry>) -> Self {
        Self {
            success: true,
            message: format!("{} transaction(s)", transactions.len()),
            count: transactions.len(),
            transactions,
        }
    }
}

impl StatsResponse {
    #[must_use]
    pub fn new(stats: TaskStats) -> Self {
        Self {
            success: true,
            message: "Task statistics".into(),
            stats,
        }
    }
}

impl MessageResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    #[must_use]
    pub fn new(kind: ErrorKind, reason: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: ErrorDetail {
                kind,
                reason: reason.map(String::from),
                retryable: kind.is_retryable(),
            },
        }
    }
}
