//! Column layouts for the rows the CLI prints as tables.

use tb_core::entities::{Task, TaskStats, TransactionEntry};

/// A value printed as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    /// Column whose value is a task status (colored on a terminal).
    const STATUS_COLUMN: Option<usize> = None;
    /// Columns aligned right.
    const NUMERIC_COLUMNS: &'static [usize] = &[];

    fn cells(&self) -> Vec<String>;
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

impl TableRow for Task {
    const HEADERS: &'static [&'static str] = &[
        "id", "status", "title", "priority", "category", "assignee", "creator", "reward", "due",
        "tags",
    ];
    const STATUS_COLUMN: Option<usize> = Some(1);
    const NUMERIC_COLUMNS: &'static [usize] = &[0];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.status.to_string(),
            self.title.clone(),
            or_dash(self.priority.as_deref()),
            or_dash(self.category.as_deref()),
            or_dash(self.assignee.as_deref()),
            self.creator.clone(),
            format!("{} {}", self.reward.amount, self.reward.token),
            or_dash(self.due_date.map(|d| d.to_string()).as_deref()),
            or_dash(Some(&self.tags.join(","))),
        ]
    }
}

impl TableRow for TransactionEntry {
    const HEADERS: &'static [&'static str] = &[
        "task", "type", "status", "title", "assignee", "reward", "fee", "proof", "at",
    ];
    const STATUS_COLUMN: Option<usize> = Some(2);
    const NUMERIC_COLUMNS: &'static [usize] = &[0, 6];

    fn cells(&self) -> Vec<String> {
        vec![
            self.task_id.to_string(),
            self.transaction_type.to_string(),
            self.status.to_string(),
            self.title.clone(),
            or_dash(self.assignee.as_deref()),
            format!("{} {}", self.reward_amount, self.reward_token),
            self.network_fee.to_string(),
            self.proof.clone(),
            self.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}

impl TableRow for TaskStats {
    const HEADERS: &'static [&'static str] = &["open", "in_progress", "completed", "total"];
    const NUMERIC_COLUMNS: &'static [usize] = &[0, 1, 2, 3];

    fn cells(&self) -> Vec<String> {
        [self.open, self.in_progress, self.completed, self.total]
            .iter()
            .map(u64::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tb_core::entities::{Reward, Task};
    use tb_core::enums::TaskStatus;
    use tb_core::projection;

    use super::TableRow;

    fn task() -> Task {
        let at = Utc.with_ymd_and_hms(2025, 9, 20, 20, 0, 16).unwrap();
        Task {
            id: 3,
            title: "Fix bug".into(),
            description: "desc".into(),
            priority: Some("high".into()),
            category: None,
            assignee: Some("0xB".into()),
            creator: "0xA".into(),
            status: TaskStatus::InProgress,
            due_date: None,
            estimated_hours: None,
            reward: Reward {
                amount: 2.5,
                token: "SHM".into(),
            },
            tags: vec!["ui".into(), "wallet".into()],
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn task_cells_follow_headers() {
        let cells = task().cells();
        assert_eq!(cells.len(), Task::HEADERS.len());
        assert_eq!(
            cells,
            vec!["3", "in_progress", "Fix bug", "high", "-", "0xB", "0xA", "2.5 SHM", "-", "ui,wallet"]
        );
    }

    #[test]
    fn transaction_cells_follow_headers() {
        let entry = projection::entry_for(&task(), 0.0001).expect("accepted task has an entry");
        let cells = entry.cells();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], "3");
        assert_eq!(cells[1], "task_accepted");
        assert_eq!(cells[2], "in_progress");
        assert_eq!(cells[6], "0.0001");
        assert_eq!(cells[7], entry.proof);
    }
}
