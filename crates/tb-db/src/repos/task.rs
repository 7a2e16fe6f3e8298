//! Task repository: create, read, filtered listing, status transitions.
//!
//! Accept and complete are each one conditional `UPDATE`. The `WHERE` clause
//! carries the whole precondition, so of two racing callers exactly one sees
//! an affected row. The loser reads the task back and the guard from
//! `tb_core::transitions` names the conflict.

use chrono::Utc;

use tb_core::CoreError;
use tb_core::entities::{DEFAULT_REWARD_TOKEN, NewTask, Reward, Task, TaskStats};
use tb_core::enums::TaskStatus;
use tb_core::transitions::{check_accept, check_complete, normalize_caller};

use crate::error::DatabaseError;
use crate::helpers::{
    OPEN_STATUS_SQL, UNASSIGNED_SQL, get_opt_f64, get_opt_string, join_tags, like_pattern,
    parse_datetime, parse_optional_date, split_tags, timestamp,
};
use crate::service::TaskService;

pub(crate) const SELECT_COLS: &str = "id, title, description, priority, category, assignee, creator, status, \
     due_date, estimated_hours, reward_amount, reward_token, tags, created_at, updated_at";

/// Newest-created first; id breaks ties between rows created in the same instant.
pub(crate) const ORDER_NEWEST: &str = "ORDER BY created_at DESC, id DESC";

pub(crate) fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    let raw_status = row.get::<Option<String>>(7)?;
    let status = TaskStatus::from_storage(raw_status.as_deref()).ok_or_else(|| {
        DatabaseError::InvalidState(format!(
            "unknown task status '{}'",
            raw_status.as_deref().unwrap_or_default()
        ))
    })?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?.unwrap_or_default(),
        priority: get_opt_string(row, 3)?,
        category: get_opt_string(row, 4)?,
        assignee: get_opt_string(row, 5)?,
        creator: get_opt_string(row, 6)?.unwrap_or_default(),
        status,
        due_date: parse_optional_date(get_opt_string(row, 8)?.as_deref())?,
        estimated_hours: get_opt_f64(row, 9)?,
        reward: Reward {
            amount: get_opt_f64(row, 10)?.unwrap_or_default(),
            token: get_opt_string(row, 11)?.unwrap_or_else(|| DEFAULT_REWARD_TOKEN.to_string()),
        },
        tags: split_tags(get_opt_string(row, 12)?.as_deref()),
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
    })
}

/// Parse listing rows. A row whose status is outside the lifecycle is logged
/// and left out instead of failing the whole listing.
pub(crate) async fn collect_listed(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        match row_to_task(&row) {
            Ok(task) => tasks.push(task),
            Err(DatabaseError::InvalidState(reason)) => {
                tracing::warn!(id = ?row.get::<i64>(0).ok(), %reason, "skipping task row");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(tasks)
}

/// Filter criteria for task listings. Blank strings are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub assignee: Option<String>,
    pub creator: Option<String>,
    /// Substring of the title or description.
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl TaskFilter {
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl TaskService {
    /// Validate and insert a new open task posted by `creator`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core(Validation)` for bad input or a blank
    /// creator, or a storage error if the INSERT fails.
    pub async fn create_task(
        &self,
        mut new_task: NewTask,
        creator: &str,
    ) -> Result<Task, DatabaseError> {
        let creator = normalize_caller(creator)?;
        if new_task.reward.token.trim().is_empty() {
            new_task.reward.token = self.default_reward_token().to_string();
        }
        let task = new_task.validate()?;
        let now = timestamp(Utc::now());

        let params: Vec<libsql::Value> = vec![
            task.title.clone().into(),
            task.description.clone().into(),
            task.priority.clone().map_or(libsql::Value::Null, Into::into),
            task.category.clone().map_or(libsql::Value::Null, Into::into),
            creator.to_string().into(),
            TaskStatus::Open.as_str().to_string().into(),
            task.due_date
                .map_or(libsql::Value::Null, |d| d.format("%Y-%m-%d").to_string().into()),
            task.estimated_hours.map_or(libsql::Value::Null, libsql::Value::Real),
            libsql::Value::Real(task.reward.amount),
            task.reward.token.clone().into(),
            join_tags(&task.tags).into(),
            now.clone().into(),
            now.into(),
        ];

        let sql = format!(
            "INSERT INTO tasks (title, description, priority, category, creator, status, due_date,
                                estimated_hours, reward_amount, reward_token, tags, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
             RETURNING {SELECT_COLS}"
        );
        let mut rows = self
            .db()
            .query_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let created = row_to_task(&row)?;

        tracing::info!(task_id = created.id, creator, "task created");
        Ok(created)
    }

    /// Fetch a single task.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core(NotFound)` if no task has this id.
    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::Core(CoreError::NotFound { id }))?;
        row_to_task(&row)
    }

    /// List tasks matching `filter`, newest first. Without `filter.limit`
    /// every matching task is returned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        match filter.status {
            Some(TaskStatus::Open) => conditions.push(OPEN_STATUS_SQL.to_string()),
            Some(status) => {
                params.push(status.as_str().to_string().into());
                conditions.push(format!("status = ?{}", params.len()));
            }
            None => {}
        }
        for (column, value) in [
            ("priority", &filter.priority),
            ("category", &filter.category),
            ("assignee", &filter.assignee),
            ("creator", &filter.creator),
        ] {
            if let Some(value) = non_blank(value.as_ref()) {
                params.push(value.to_string().into());
                conditions.push(format!("{column} = ?{}", params.len()));
            }
        }
        if let Some(term) = non_blank(filter.search.as_ref()) {
            params.push(like_pattern(term).into());
            let n = params.len();
            conditions.push(format!(
                "(title LIKE ?{n} ESCAPE '\\' OR description LIKE ?{n} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit_clause = filter
            .limit
            .map(|limit| format!("LIMIT {}", limit.max(1)))
            .unwrap_or_default();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks {where_clause} {ORDER_NEWEST} {limit_clause}"
        );

        let rows = self
            .db()
            .query_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        let tasks = collect_listed(rows).await?;

        tracing::debug!(count = tasks.len(), ?filter, "listed tasks");
        Ok(tasks)
    }

    /// Assign an open task to `caller` and move it to `in_progress`.
    ///
    /// # Errors
    ///
    /// - `Core(Validation)` if `caller` is blank.
    /// - `Core(NotFound)` if the task does not exist.
    /// - `Core(Conflict(AlreadyAssigned | InvalidStatus))` if the task was
    ///   not open and unassigned at the moment of the write.
    pub async fn accept_task(&self, id: i64, caller: &str) -> Result<Task, DatabaseError> {
        let caller = normalize_caller(caller)?;
        let now = timestamp(Utc::now());

        let sql = format!(
            "UPDATE tasks SET assignee = ?1, status = ?2, updated_at = ?3
             WHERE id = ?4 AND {UNASSIGNED_SQL} AND {OPEN_STATUS_SQL}"
        );
        let affected = self
            .db()
            .execute_with(&sql, || {
                libsql::params![caller, TaskStatus::InProgress.as_str(), now.as_str(), id]
            })
            .await?;

        if affected == 0 {
            let current = self.get_task(id).await?;
            if let Err(conflict) = check_accept(&current) {
                tracing::warn!(task_id = id, caller, reason = conflict.code(), "accept rejected");
                return Err(conflict.into());
            }
            return Err(DatabaseError::InvalidState(format!(
                "accept of task {id} matched no row but the task is acceptable"
            )));
        }

        tracing::info!(task_id = id, assignee = caller, "task accepted");
        self.get_task(id).await
    }

    /// Mark an in-progress task completed. Only its assignee may do this.
    ///
    /// # Errors
    ///
    /// - `Core(Validation)` if `caller` is blank.
    /// - `Core(NotFound)` if the task does not exist.
    /// - `Core(Conflict(NotInProgress | NotOwner))` otherwise.
    pub async fn complete_task(&self, id: i64, caller: &str) -> Result<Task, DatabaseError> {
        let caller = normalize_caller(caller)?;
        let now = timestamp(Utc::now());

        let affected = self
            .db()
            .execute_with(
                "UPDATE tasks SET status = ?1, updated_at = ?2
                 WHERE id = ?3 AND status = ?4 AND assignee = ?5",
                || {
                    libsql::params![
                        TaskStatus::Completed.as_str(),
                        now.as_str(),
                        id,
                        TaskStatus::InProgress.as_str(),
                        caller
                    ]
                },
            )
            .await?;

        if affected == 0 {
            let current = self.get_task(id).await?;
            if let Err(conflict) = check_complete(&current, caller) {
                tracing::warn!(task_id = id, caller, reason = conflict.code(), "complete rejected");
                return Err(conflict.into());
            }
            return Err(DatabaseError::InvalidState(format!(
                "complete of task {id} matched no row but the task is completable"
            )));
        }

        tracing::info!(task_id = id, assignee = caller, "task completed");
        self.get_task(id).await
    }

    /// Administrative status override. Bypasses the transition guards and
    /// leaves the assignee untouched.
    ///
    /// # Errors
    ///
    /// Returns `Core(NotFound)` if the task does not exist.
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<Task, DatabaseError> {
        let now = timestamp(Utc::now());
        let affected = self
            .db()
            .execute_with(
                "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![status.as_str(), now.as_str(), id],
            )
            .await?;
        if affected == 0 {
            return Err(CoreError::NotFound { id }.into());
        }

        tracing::info!(task_id = id, %status, "task status overridden");
        self.get_task(id).await
    }

    /// Remove a task unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `Core(NotFound)` if the task does not exist.
    pub async fn delete_task(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM tasks WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(CoreError::NotFound { id }.into());
        }
        tracing::info!(task_id = id, "task deleted");
        Ok(())
    }

    /// Count tasks per status. Legacy empty statuses count as open; statuses
    /// outside the lifecycle are not counted.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn task_stats(&self) -> Result<TaskStats, DatabaseError> {
        let sql = format!(
            "SELECT CASE WHEN {OPEN_STATUS_SQL} THEN 'open' ELSE status END AS normalized, COUNT(*)
             FROM tasks GROUP BY normalized"
        );
        let mut rows = self.db().query_with(&sql, || ()).await?;

        let mut stats = TaskStats::default();
        while let Some(row) = rows.next().await? {
            let raw = row.get::<String>(0)?;
            let count = u64::try_from(row.get::<i64>(1)?).unwrap_or_default();
            match TaskStatus::from_storage(Some(&raw)) {
                Some(status) => stats.record(status, count),
                None => tracing::warn!(status = %raw, count, "not counting tasks with unknown status"),
            }
        }
        Ok(stats)
    }
}
