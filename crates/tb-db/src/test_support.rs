//! Shared test utilities for tb-db unit tests.

use tb_core::entities::{NewTask, Task};

use crate::service::TaskService;
use crate::{IN_MEMORY, TaskDb};

/// Create an in-memory `TaskService` with default settings.
pub async fn test_service() -> TaskService {
    let db = TaskDb::open_local(IN_MEMORY).await.unwrap();
    TaskService::from_db(db)
}

/// Create a task with the given title, posted by `creator`.
pub async fn create_test_task(svc: &TaskService, title: &str, creator: &str) -> Task {
    svc.create_task(NewTask::new(title, format!("{title} description")), creator)
        .await
        .unwrap()
}

/// Insert a raw row, bypassing validation, the way older deployments stored tasks.
pub async fn insert_legacy_row(svc: &TaskService, title: &str, status: &str, assignee: &str) -> i64 {
    insert_raw(svc, title, status, assignee, "2025-09-20 20:00:16").await
}

/// Insert an open, unassigned raw row with the given `created_at`/`updated_at` text.
pub async fn insert_row_at(svc: &TaskService, title: &str, at: &str) -> i64 {
    insert_raw(svc, title, "open", "", at).await
}

async fn insert_raw(svc: &TaskService, title: &str, status: &str, assignee: &str, at: &str) -> i64 {
    svc.db()
        .conn()
        .execute(
            "INSERT INTO tasks (title, description, creator, status, assignee, created_at, updated_at)
             VALUES (?1, 'legacy', '0xA', ?2, ?3, ?4, ?4)",
            libsql::params![title, status, assignee, at],
        )
        .await
        .unwrap();
    svc.db().conn().last_insert_rowid()
}
