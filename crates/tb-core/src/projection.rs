//! Transaction-log projection.
//!
//! Turns task records into the history feed shown next to the wallet. Every
//! task whose status is not `open` yields exactly one entry; the entry's type
//! and description depend on the status alone.

use crate::entities::{Task, TransactionEntry};
use crate::enums::TransactionType;

/// Fixed informational fee attached to every entry unless configured otherwise.
pub const DEFAULT_NETWORK_FEE: f64 = 0.0001;

/// Project a single task. Returns `None` for open tasks.
#[must_use]
pub fn entry_for(task: &Task, network_fee: f64) -> Option<TransactionEntry> {
    let transaction_type = TransactionType::for_status(task.status)?;
    Some(TransactionEntry {
        id: task.id,
        task_id: task.id,
        title: task.title.clone(),
        assignee: task.assignee.clone(),
        creator: task.creator.clone(),
        status: task.status,
        transaction_type,
        description: transaction_type.description().to_string(),
        reward_amount: task.reward.amount,
        reward_token: task.reward.token.clone(),
        network_fee,
        proof: proof_for(task),
        created_at: task.created_at,
    })
}

/// Project tasks in their given order, skipping open ones.
#[must_use]
pub fn project(tasks: &[Task], network_fee: f64) -> Vec<TransactionEntry> {
    tasks
        .iter()
        .filter_map(|task| entry_for(task, network_fee))
        .collect()
}

/// `task_{id}_{updated_at seconds}`: stable for as long as the row is unchanged.
#[must_use]
pub fn proof_for(task: &Task) -> String {
    format!("task_{}_{}", task.id, task.updated_at.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Reward;
    use crate::enums::TaskStatus;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn task(id: i64, status: TaskStatus) -> Task {
        let created = Utc.with_ymd_and_hms(2025, 9, 20, 20, 0, 16).unwrap();
        let updated = Utc.with_ymd_and_hms(2025, 9, 20, 21, 0, 0).unwrap();
        Task {
            id,
            title: format!("task {id}"),
            description: "desc".into(),
            priority: None,
            category: None,
            assignee: (status != TaskStatus::Open).then(|| "0xB".to_string()),
            creator: "0xA".into(),
            status,
            due_date: None,
            estimated_hours: None,
            reward: Reward {
                amount: 1.5,
                token: "SHM".into(),
            },
            tags: Vec::new(),
            created_at: created,
            updated_at: updated,
        }
    }

    #[test]
    fn open_tasks_are_excluded() {
        let tasks = vec![
            task(1, TaskStatus::Open),
            task(2, TaskStatus::InProgress),
            task(3, TaskStatus::Completed),
            task(4, TaskStatus::Open),
        ];
        let entries = project(&tasks, DEFAULT_NETWORK_FEE);
        let ids: Vec<i64> = entries.iter().map(|e| e.task_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(entries.iter().all(|e| e.status != TaskStatus::Open));
    }

    #[test]
    fn entry_fields_derive_from_status() {
        let entry = entry_for(&task(10, TaskStatus::Completed), 0.0001).unwrap();
        assert_eq!(entry.transaction_type, TransactionType::TaskCompleted);
        assert_eq!(entry.description, "Task completed and reward distributed");
        assert_eq!(entry.reward_amount, 1.5);
        assert_eq!(entry.network_fee, 0.0001);
        assert_eq!(entry.assignee.as_deref(), Some("0xB"));

        let entry = entry_for(&task(11, TaskStatus::InProgress), 0.0001).unwrap();
        assert_eq!(entry.transaction_type, TransactionType::TaskAccepted);
        assert_eq!(entry.description, "Task accepted and in progress");
    }

    #[test]
    fn proof_is_deterministic() {
        let t = task(10, TaskStatus::Completed);
        assert_eq!(proof_for(&t), proof_for(&t.clone()));
        assert_eq!(proof_for(&t), format!("task_10_{}", t.updated_at.timestamp()));
    }

    #[test]
    fn projection_is_recomputable() {
        let tasks = vec![task(2, TaskStatus::InProgress), task(3, TaskStatus::Completed)];
        assert_eq!(project(&tasks, 0.5), project(&tasks, 0.5));
    }
}
