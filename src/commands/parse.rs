use super::CommandContext;
use crate::document::DocumentFormat;
use crate::handler::FailureHandler;
use anyhow::{Result, anyhow};
use serde::Serialize;

/// Parse a document and render it in the `output` format
pub fn cmd_parse<H: FailureHandler>(
    ctx: &CommandContext<H>,
    expression: &str,
    format: Option<DocumentFormat>,
    output: DocumentFormat,
) -> Result<String> {
    let path = ctx.resolve(expression)?;
    let format = format
        .or_else(|| DocumentFormat::from_path(&path))
        .ok_or_else(|| {
            anyhow!(
                "Cannot infer the document format of '{}', pass --format",
                path.display()
            )
        })?;
    let error_message = format!("Could not load document '{}'", expression.trim());

    match format {
        DocumentFormat::Json => render(&ctx.loader.json_from_file(&path, &error_message)?, output),
        DocumentFormat::Yaml => render(&ctx.loader.yaml_from_file(&path, &error_message)?, output),
    }
}

fn render<T: Serialize>(document: &T, output: DocumentFormat) -> Result<String> {
    Ok(match output {
        DocumentFormat::Json => format!("{}\n", serde_json::to_string_pretty(document)?),
        DocumentFormat::Yaml => serde_yaml::to_string(document)?,
    })
}
