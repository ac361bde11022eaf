use crate::diagnostics::ColorMode;
use crate::document::YamlOptions;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub paths: Option<PathsInput>,
    pub diagnostics: Option<DiagnosticsInput>,
    pub yaml: Option<YamlInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub paths: Paths,
    pub diagnostics: Diagnostics,
    pub yaml: YamlOptions,
}

// Path resolution
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathsInput {
    /// Base directory for relative path expressions
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Paths {
    pub base_dir: PathBuf,
}

// Terminal output
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiagnosticsInput {
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub color: ColorMode,
}

// YAML parsing
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YamlInput {
    pub safe_mode: Option<bool>,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    #[arg(long, help = "Base directory for relative paths")]
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct YamlArgs {
    #[arg(long, help = "Allow explicit YAML type tags")]
    pub no_safe_mode: bool,
}

// Conversion functions from CLI args to config input
impl From<PathArgs> for PathsInput {
    fn from(args: PathArgs) -> Self {
        Self {
            base_dir: args.base_dir,
        }
    }
}

impl From<YamlArgs> for YamlInput {
    fn from(args: YamlArgs) -> Self {
        Self {
            safe_mode: if args.no_safe_mode { Some(false) } else { None },
        }
    }
}
