use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// Task counts per status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskStats {
    pub open: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub total: u64,
}

impl TaskStats {
    /// Add `count` tasks with the given status.
    pub fn record(&mut self, status: TaskStatus, count: u64) {
        match status {
            TaskStatus::Open => self.open += count,
            TaskStatus::InProgress => self.in_progress += count,
            TaskStatus::Completed => self.completed += count,
        }
        self.total += count;
    }
}
