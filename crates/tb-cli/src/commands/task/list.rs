use tb_core::responses::TaskListResponse;
use tb_db::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::status::parse_status;
use crate::context::AppContext;
use crate::output::output;

/// Borrowed `tb task list` filter flags.
#[derive(Debug, Default)]
pub struct ListFilters<'a> {
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub category: Option<&'a str>,
    pub assignee: Option<&'a str>,
    pub creator: Option<&'a str>,
    pub search: Option<&'a str>,
}

pub async fn run(
    filters: &ListFilters<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = build_filter(filters, flags.limit)?;
    let tasks = ctx.service.list_tasks(&filter).await?;

    let response = TaskListResponse::new(tasks);
    output(&response, &response.tasks, flags.format)
}

/// `all` (or an empty value) lists every status. No `--limit` lists every task.
fn build_filter(filters: &ListFilters<'_>, limit: Option<u32>) -> anyhow::Result<TaskFilter> {
    let status = match filters.status.map(str::trim) {
        None | Some("" | "all") => None,
        Some(raw) => Some(parse_status(raw)?),
    };

    Ok(TaskFilter {
        status,
        priority: filters.priority.map(str::to_string),
        category: filters.category.map(str::to_string),
        assignee: filters.assignee.map(str::to_string),
        creator: filters.creator.map(str::to_string),
        search: filters.search.map(str::to_string),
        limit,
    })
}
