use anyhow::bail;

use crate::cli::GlobalFlags;

/// Resolve the caller wallet address from `--as`, rejecting blank values.
pub fn require_caller(flags: &GlobalFlags) -> anyhow::Result<&str> {
    match flags.caller.as_deref().map(str::trim) {
        Some(caller) if !caller.is_empty() => Ok(caller),
        _ => bail!("no caller address: pass --as <address>"),
    }
}
