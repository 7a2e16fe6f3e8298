use anyhow::Context;
use tb_core::enums::TaskStatus;

/// Parse a `--status` value. `in-progress` is accepted for `in_progress`.
pub fn parse_status(raw: &str) -> anyhow::Result<TaskStatus> {
    raw.trim()
        .replace('-', "_")
        .parse::<TaskStatus>()
        .with_context(|| format!("invalid --status '{raw}'"))
}
