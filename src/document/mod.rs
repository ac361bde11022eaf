//! Structured document parsing (JSON and YAML).
//!
//! Parsers propagate failures unchanged. The exit-policy wrappers are
//! [`crate::loader::Loader::load_from_string`] and
//! [`crate::loader::Loader::load_from_file`].

pub mod json;
pub mod yaml;

pub use json::{JsonDocument, JsonParser};
pub use yaml::{YamlDocument, YamlOptions, YamlParser};

use anyhow::Result;
use std::path::Path;

/// A text format that parses into a key-value mapping
pub trait DocumentParser {
    type Document;

    /// Human-readable format name, used in log lines
    const FORMAT: &'static str;

    fn parse_str(&self, text: &str) -> Result<Self::Document>;

    fn parse_file(&self, path: &Path) -> Result<Self::Document> {
        tracing::debug!("Parsing {} file {}", Self::FORMAT, path.display());
        let text = crate::files::read_text(path)?;
        self.parse_str(&text)
    }
}

/// Output format when a loaded document is printed back
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}
