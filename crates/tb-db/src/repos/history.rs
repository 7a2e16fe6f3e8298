//! Transaction history: the projection of every non-open task.

use tb_core::entities::TransactionEntry;
use tb_core::projection;

use crate::error::DatabaseError;
use crate::helpers::OPEN_STATUS_SQL;
use crate::repos::task::{ORDER_NEWEST, SELECT_COLS, collect_listed};
use crate::service::TaskService;

impl TaskService {
    /// Load every task that has left `open` and project it into history entries.
    ///
    /// Nothing is stored: the log is recomputed from the tasks table on each
    /// call, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn transaction_history(&self) -> Result<Vec<TransactionEntry>, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM tasks WHERE NOT ({OPEN_STATUS_SQL}) {ORDER_NEWEST}");
        let rows = self.db().query_with(&sql, || ()).await?;
        let tasks = collect_listed(rows).await?;

        let entries = projection::project(&tasks, self.network_fee());
        tracing::debug!(count = entries.len(), "projected transaction history");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tb_core::enums::{TaskStatus, TransactionType};

    use crate::test_support::{create_test_task, insert_legacy_row, test_service};

    #[tokio::test]
    async fn empty_board_has_no_history() {
        let svc = test_service().await;
        create_test_task(&svc, "open only", "0xA").await;
        assert!(svc.transaction_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_covers_accepted_and_completed_tasks() {
        let svc = test_service().await;
        let a = create_test_task(&svc, "a", "0xA").await;
        let b = create_test_task(&svc, "b", "0xA").await;
        create_test_task(&svc, "still open", "0xA").await;
        insert_legacy_row(&svc, "legacy open", "", "").await;

        svc.accept_task(a.id, "0xB").await.unwrap();
        svc.accept_task(b.id, "0xC").await.unwrap();
        svc.complete_task(b.id, "0xC").await.unwrap();

        let history = svc.transaction_history().await.unwrap();
        assert_eq!(
            history.iter().map(|e| e.task_id).collect::<Vec<_>>(),
            vec![b.id, a.id]
        );
        assert!(history.iter().all(|e| e.status != TaskStatus::Open));

        let completed = &history[0];
        assert_eq!(completed.transaction_type, TransactionType::TaskCompleted);
        assert_eq!(completed.assignee.as_deref(), Some("0xC"));
        assert_eq!(completed.creator, "0xA");
        assert!(completed.proof.starts_with(&format!("task_{}_", b.id)));

        assert_eq!(history[1].transaction_type, TransactionType::TaskAccepted);
    }

    #[tokio::test]
    async fn history_uses_configured_fee() {
        let svc = test_service().await.with_network_fee(0.25);
        let task = create_test_task(&svc, "a", "0xA").await;
        svc.accept_task(task.id, "0xB").await.unwrap();

        let history = svc.transaction_history().await.unwrap();
        assert_eq!(history[0].network_fee, 0.25);
    }

    #[tokio::test]
    async fn history_is_recomputable() {
        let svc = test_service().await;
        let task = create_test_task(&svc, "a", "0xA").await;
        svc.accept_task(task.id, "0xB").await.unwrap();

        assert_eq!(
            svc.transaction_history().await.unwrap(),
            svc.transaction_history().await.unwrap()
        );
    }
}
