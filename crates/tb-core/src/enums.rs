//! Status and transaction-type enums for Taskboard.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `TaskStatus` provides `allowed_next_states()` to enforce valid transitions at
//! the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// open → in_progress → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Read a status column, treating legacy empty and `"null"` values as `open`.
    ///
    /// Returns `None` for anything else that is not a known status.
    #[must_use]
    pub fn from_storage(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("" | "null") => Some(Self::Open),
            Some(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown status '{s}' (expected one of: open, in_progress, completed)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Kind of synthetic transaction surfaced in the history feed.
///
/// Derived from a task's status only; open tasks have no transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    TaskAccepted,
    TaskCompleted,
}

impl TransactionType {
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Option<Self> {
        match status {
            TaskStatus::Open => None,
            TaskStatus::InProgress => Some(Self::TaskAccepted),
            TaskStatus::Completed => Some(Self::TaskCompleted),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskAccepted => "task_accepted",
            Self::TaskCompleted => "task_completed",
        }
    }

    /// Human-readable line shown next to the entry.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TaskAccepted => "Task accepted and in progress",
            Self::TaskCompleted => "Task completed and reward distributed",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
