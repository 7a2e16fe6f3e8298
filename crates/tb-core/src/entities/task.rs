use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// Token symbol used when a reward does not name one.
pub const DEFAULT_REWARD_TOKEN: &str = "SHM";

/// Informational reward attached to a task. Has no on-chain effect.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Reward {
    pub amount: f64,
    pub token: String,
}

impl Default for Reward {
    fn default() -> Self {
        Self {
            amount: 0.0,
            token: DEFAULT_REWARD_TOKEN.to_string(),
        }
    }
}

/// A unit of work moving through `open → in_progress → completed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
    pub category: Option<String>,
    /// Wallet address of the worker who accepted the task.
    pub assignee: Option<String>,
    /// Wallet address of the task's author.
    pub creator: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    pub reward: Reward,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.assignee.as_deref().is_some_and(|a| !a.is_empty())
    }

    #[must_use]
    pub fn is_assigned_to(&self, address: &str) -> bool {
        self.assignee.as_deref() == Some(address)
    }
}
