use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{TaskStatus, TransactionType};

/// One synthetic entry of the transaction history feed.
///
/// Built by [`crate::projection`] from a non-open task; owns no state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TransactionEntry {
    pub id: i64,
    pub task_id: i64,
    pub title: String,
    pub assignee: Option<String>,
    pub creator: String,
    pub status: TaskStatus,
    pub transaction_type: TransactionType,
    pub description: String,
    pub reward_amount: f64,
    pub reward_token: String,
    pub network_fee: f64,
    /// Deterministic pseudo-reference, not a cryptographic proof.
    pub proof: String,
    pub created_at: DateTime<Utc>,
}
