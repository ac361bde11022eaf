use super::CommandContext;
use crate::handler::FailureHandler;
use anyhow::Result;
use std::path::PathBuf;

/// File contents as printable chunks: one trimmed string (with a newline
/// appended) or every line as read.
pub fn cmd_cat<H: FailureHandler>(
    ctx: &CommandContext<H>,
    expression: &str,
    lines: bool,
) -> Result<Vec<String>> {
    let path = ctx.resolve(expression)?;
    let error_message = format!("Could not read file '{}'", expression.trim());

    if lines {
        ctx.loader.load_as_lines(&path, &error_message)
    } else {
        let content = ctx.loader.load_as_string(&path, &error_message)?;
        Ok(vec![format!("{}\n", content)])
    }
}

pub fn cmd_write<H: FailureHandler>(
    ctx: &CommandContext<H>,
    expression: &str,
    content: &str,
) -> Result<PathBuf> {
    let path = ctx.resolve(expression)?;
    ctx.loader.write_string(
        &path,
        content,
        &format!("Could not write file '{}'", expression.trim()),
    )?;
    Ok(path)
}
