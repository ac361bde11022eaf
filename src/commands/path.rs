use super::CommandContext;
use crate::handler::FailureHandler;
use crate::paths;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn cmd_resolve<H: FailureHandler>(ctx: &CommandContext<H>, expression: &str) -> Result<PathBuf> {
    ctx.resolve(expression)
}

pub fn cmd_prefix_match(first: &Path, second: &Path) -> bool {
    paths::string_prefix_matches(first, second)
}

/// Returns the resolved directory when it exists
pub fn cmd_check_dir<H: FailureHandler>(ctx: &CommandContext<H>, expression: &str) -> Result<PathBuf> {
    let dir = ctx.resolve(expression)?;
    ctx.loader.assert_directory_exists(
        &dir,
        &format!("Directory check failed for '{}'", expression.trim()),
    )?;
    Ok(dir)
}
