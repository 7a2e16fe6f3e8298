//! Accept/complete guards for the task state machine.
//!
//! These are pure checks over a task snapshot. The store applies each
//! transition as a single conditional write; when that write loses, it reads
//! the task back and runs the same guard to name the reason.

use crate::entities::Task;
use crate::enums::TaskStatus;
use crate::errors::{ConflictKind, CoreError};

/// Trim a caller address and reject an empty one.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the address is blank.
pub fn normalize_caller(caller: &str) -> Result<&str, CoreError> {
    let caller = caller.trim();
    if caller.is_empty() {
        return Err(CoreError::Validation(
            "caller wallet address is required".into(),
        ));
    }
    Ok(caller)
}

/// Accept is legal iff the task has no assignee and is `open`.
///
/// # Errors
///
/// `AlreadyAssigned` takes precedence over `InvalidStatus`.
pub fn check_accept(task: &Task) -> Result<(), ConflictKind> {
    if let Some(assignee) = task.assignee.as_deref().filter(|a| !a.is_empty()) {
        return Err(ConflictKind::AlreadyAssigned {
            assignee: assignee.to_string(),
        });
    }
    if !task.status.can_transition_to(TaskStatus::InProgress) {
        return Err(ConflictKind::InvalidStatus {
            status: task.status,
        });
    }
    Ok(())
}

/// Complete is legal iff the task is `in_progress` and assigned to `caller`.
///
/// # Errors
///
/// `NotInProgress` takes precedence over `NotOwner`.
pub fn check_complete(task: &Task, caller: &str) -> Result<(), ConflictKind> {
    if !task.status.can_transition_to(TaskStatus::Completed) {
        return Err(ConflictKind::NotInProgress {
            status: task.status,
        });
    }
    if !task.is_assigned_to(caller) {
        return Err(ConflictKind::NotOwner);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Reward;
    use chrono::Utc;
    use rstest::rstest;

    fn task(status: TaskStatus, assignee: Option<&str>) -> Task {
        let now = Utc::now();
        Task {
            id: 1,
            title: "Fix bug".into(),
            description: "desc".into(),
            priority: None,
            category: None,
            assignee: assignee.map(String::from),
            creator: "0xA".into(),
            status,
            due_date: None,
            estimated_hours: None,
            reward: Reward::default(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn accept_open_unassigned() {
        assert!(check_accept(&task(TaskStatus::Open, None)).is_ok());
    }

    #[test]
    fn accept_treats_empty_assignee_as_unassigned() {
        assert!(check_accept(&task(TaskStatus::Open, Some(""))).is_ok());
    }

    #[rstest]
    #[case(TaskStatus::Open, Some("0xB"))]
    #[case(TaskStatus::InProgress, Some("0xB"))]
    #[case(TaskStatus::Completed, Some("0xB"))]
    fn accept_rejects_assigned(#[case] status: TaskStatus, #[case] assignee: Option<&str>) {
        assert_eq!(
            check_accept(&task(status, assignee)),
            Err(ConflictKind::AlreadyAssigned {
                assignee: "0xB".into()
            })
        );
    }

    #[rstest]
    #[case(TaskStatus::InProgress)]
    #[case(TaskStatus::Completed)]
    fn accept_rejects_non_open_status(#[case] status: TaskStatus) {
        assert_eq!(
            check_accept(&task(status, None)),
            Err(ConflictKind::InvalidStatus { status })
        );
    }

    #[test]
    fn complete_by_assignee() {
        assert!(check_complete(&task(TaskStatus::InProgress, Some("0xB")), "0xB").is_ok());
    }

    #[test]
    fn complete_by_other_caller() {
        assert_eq!(
            check_complete(&task(TaskStatus::InProgress, Some("0xB")), "0xC"),
            Err(ConflictKind::NotOwner)
        );
    }

    #[rstest]
    #[case(TaskStatus::Open, None)]
    #[case(TaskStatus::Completed, Some("0xB"))]
    fn complete_requires_in_progress(
        #[case] status: TaskStatus,
        #[case] assignee: Option<&str>,
    ) {
        assert_eq!(
            check_complete(&task(status, assignee), "0xB"),
            Err(ConflictKind::NotInProgress { status })
        );
    }

    #[test]
    fn caller_is_trimmed() {
        assert_eq!(normalize_caller("  0xB ").unwrap(), "0xB");
    }

    #[test]
    fn blank_caller_rejected() {
        assert!(matches!(
            normalize_caller("   "),
            Err(CoreError::Validation(_))
        ));
    }
}
