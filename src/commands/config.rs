use crate::config::{Config, ConfigBuilder, parse_config_str};
use anyhow::{Result, anyhow};
use std::path::Path;

/// Config subcommands
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., paths.base_dir, yaml.safe_mode)
        key: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List all configuration values
    List {
        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Execute config command
pub fn cmd_config(
    config: &Config,
    config_file: &str,
    subcommand: Option<ConfigCommands>,
) -> Result<()> {
    match subcommand {
        Some(ConfigCommands::Get { key, format }) => {
            let value = get_config_value(config, &key)?;
            println!("{}", render_value(&value, format));
            Ok(())
        }

        Some(ConfigCommands::List { format }) => {
            print!("{}", render_config(config, format)?);
            Ok(())
        }

        Some(ConfigCommands::Validate) => {
            validate_config_file(config_file)?;
            println!("✅ Configuration file '{}' is valid", config_file);
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            println!("loadkit config - Inspect loadkit configuration");
            println!();
            println!("Usage:");
            println!("  loadkit config get <KEY>    Get a configuration value");
            println!("  loadkit config list         List all configuration values");
            println!("  loadkit config validate     Validate configuration file");
            println!();
            println!("Examples:");
            println!("  loadkit config get paths.base_dir");
            println!("  loadkit config list --format json");
            Ok(())
        }
    }
}

/// Get a configuration value by key
pub fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["paths", "base_dir"] => Ok(config.paths.base_dir.display().to_string()),
        ["diagnostics", "color"] => Ok(serde_json::to_value(config.diagnostics.color)?
            .as_str()
            .unwrap_or_default()
            .to_string()),
        ["yaml", "safe_mode"] => Ok(config.yaml.safe_mode.to_string()),
        _ => Err(anyhow!("Unknown configuration key: {}", key)),
    }
}

fn config_json(config: &Config) -> serde_json::Value {
    serde_json::json!({
        "paths": {
            "base_dir": config.paths.base_dir.display().to_string(),
        },
        "diagnostics": {
            "color": config.diagnostics.color,
        },
        "yaml": {
            "safe_mode": config.yaml.safe_mode,
        }
    })
}

/// Render the whole configuration in the requested format
pub fn render_config(config: &Config, format: OutputFormat) -> Result<String> {
    let config_map = config_json(config);

    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&config_map)?),
        OutputFormat::Yaml => serde_yaml::to_string(&config_map)?,
        OutputFormat::Text => {
            let mut out = String::from("Current Configuration:\n\n");
            render_config_text(&config_map, 0, &mut out);
            out
        }
    })
}

/// Render configuration in text format with indentation
fn render_config_text(value: &serde_json::Value, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                if val.is_object() {
                    out.push_str(&format!("{}{}:\n", prefix, key));
                    render_config_text(val, indent + 1, out);
                } else if let Some(text) = val.as_str() {
                    out.push_str(&format!("{}{}: {}\n", prefix, key, text));
                } else {
                    out.push_str(&format!("{}{}: {}\n", prefix, key, val));
                }
            }
        }
        _ => {
            out.push_str(&format!("{}{}\n", prefix, value));
        }
    }
}

/// Validate configuration file
fn validate_config_file(config_file: &str) -> Result<()> {
    let config_path = Path::new(config_file);
    if !config_path.exists() {
        return Err(anyhow!("Configuration file '{}' not found", config_file));
    }

    let config_str = std::fs::read_to_string(config_path)?;
    let config_input =
        parse_config_str(&config_str).map_err(|e| anyhow!("Invalid YAML syntax: {}", e))?;

    // Try to resolve with defaults to ensure all fields are valid
    let _resolved = ConfigBuilder::new()
        .with_file(config_input)
        .resolve()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(())
}

/// Render a single configuration value
fn render_value(value: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::json!(value).to_string(),
        OutputFormat::Text | OutputFormat::Yaml => value.to_string(),
    }
}
