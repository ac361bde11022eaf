pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::ConfigBuilder;
pub use types::*;

use crate::document::{DocumentParser, YamlParser};
use crate::paths::PathResolver;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration loading function.
///
/// A missing file yields an empty input. A relative `paths.base_dir` in the
/// file is resolved against the file's own directory.
pub fn load_config(config_file: &str) -> Result<(ConfigInput, PathBuf)> {
    load_config_with(config_file, &PathResolver::from_env())
}

pub fn load_config_with(
    config_file: &str,
    resolver: &PathResolver,
) -> Result<(ConfigInput, PathBuf)> {
    let config_dir = Path::new(config_file)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut config_input = if Path::new(config_file).exists() {
        debug!("Loading configuration from {}", config_file);
        let contents = std::fs::read_to_string(config_file)
            .with_context(|| format!("Failed to read config file: {}", config_file))?;
        parse_config_str(&contents)
            .with_context(|| format!("Invalid config file: {}", config_file))?
    } else {
        debug!("No configuration file at {}, using defaults", config_file);
        ConfigInput::default()
    };

    if let Some(base_dir) = config_input
        .paths
        .as_mut()
        .and_then(|p| p.base_dir.as_mut())
    {
        let resolved = resolver.resolve(&config_dir, base_dir)?;
        *base_dir = resolved.to_string_lossy().into_owned();
    }

    Ok((config_input, config_dir))
}

/// Parse configuration text with the same YAML rules as loaded documents:
/// tags are rejected, merge keys applied and an empty file is empty input.
pub fn parse_config_str(contents: &str) -> Result<ConfigInput> {
    let mapping = YamlParser::default().parse_str(contents)?;
    Ok(serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))?)
}
