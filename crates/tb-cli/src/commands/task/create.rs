use anyhow::Context;
use chrono::NaiveDate;
use tb_core::entities::NewTask;
use tb_core::responses::TaskResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CreateArgs;
use crate::commands::shared::caller::require_caller;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let creator = require_caller(flags)?;
    let new_task = build_new_task(args)?;
    let task = ctx.service.create_task(new_task, creator).await?;
    let response = TaskResponse::new("Task created successfully", task);
    output(&response, std::slice::from_ref(&response.task), flags.format)
}

/// A missing `--token` stays blank so the service fills in the configured default.
fn build_new_task(args: &CreateArgs) -> anyhow::Result<NewTask> {
    let mut new_task = NewTask::new(args.title.clone(), args.description.clone())
        .reward(args.reward.unwrap_or_default(), args.token.clone().unwrap_or_default())
        .tags(args.tags.iter().cloned());
    new_task.priority.clone_from(&args.priority);
    new_task.category.clone_from(&args.category);
    new_task.estimated_hours = args.hours;

    if let Some(raw) = args.due.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        let due = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid --due '{raw}' (expected YYYY-MM-DD)"))?;
        new_task = new_task.due_date(due);
    }
    Ok(new_task)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::build_new_task;
    use crate::cli::subcommands::CreateArgs;

    fn args() -> CreateArgs {
        CreateArgs {
            title: "Fix bug".to_string(),
            description: "Crash on startup".to_string(),
            priority: None,
            category: None,
            due: None,
            hours: None,
            reward: None,
            token: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn minimal_args_leave_token_blank_and_amount_zero() {
        let task = build_new_task(&args()).expect("new task should build");
        assert_eq!(task.title, "Fix bug");
        assert_eq!(task.reward.amount, 0.0);
        assert_eq!(task.reward.token, "");
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn copies_optional_fields() {
        let mut args = args();
        args.priority = Some("high".to_string());
        args.category = Some("frontend".to_string());
        args.due = Some("2025-10-01".to_string());
        args.hours = Some(3.5);
        args.reward = Some(2.5);
        args.token = Some("USDC".to_string());
        args.tags = vec!["ui".to_string()];

        let task = build_new_task(&args).expect("new task should build");
        assert_eq!(task.priority.as_deref(), Some("high"));
        assert_eq!(task.category.as_deref(), Some("frontend"));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 10, 1));
        assert_eq!(task.estimated_hours, Some(3.5));
        assert_eq!(task.reward.amount, 2.5);
        assert_eq!(task.reward.token, "USDC");
        assert_eq!(task.tags, vec!["ui".to_string()]);
    }

    #[test]
    fn rejects_malformed_due_date() {
        let mut args = args();
        args.due = Some("10/01/2025".to_string());
        let err = build_new_task(&args).expect_err("bad date should fail");
        assert!(err.to_string().contains("--due"));
    }
}
