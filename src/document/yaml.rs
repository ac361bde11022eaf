use super::DocumentParser;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

pub type YamlDocument = Mapping;

/// YAML parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct YamlOptions {
    /// Restrict documents to plain scalars, mappings and sequences.
    /// Any explicit type tag (`!tag`) is rejected.
    pub safe_mode: bool,
}

impl Default for YamlOptions {
    fn default() -> Self {
        Self { safe_mode: true }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser {
    options: YamlOptions,
}

impl YamlParser {
    pub fn new(options: YamlOptions) -> Self {
        Self { options }
    }
}

impl DocumentParser for YamlParser {
    type Document = YamlDocument;

    const FORMAT: &'static str = "YAML";

    fn parse_str(&self, text: &str) -> Result<YamlDocument> {
        if text.trim().is_empty() {
            return Ok(Mapping::new());
        }

        let mut value: Value = serde_yaml::from_str(text)?;
        value.apply_merge()?;
        if self.options.safe_mode {
            reject_tags(&value)?;
        }

        match value {
            Value::Mapping(mapping) => Ok(mapping),
            // Comment-only documents
            Value::Null => Ok(Mapping::new()),
            other => Err(anyhow!(
                "Expected a mapping at the document root, found {}",
                kind_name(&other)
            )),
        }
    }
}

fn reject_tags(value: &Value) -> Result<()> {
    match value {
        Value::Tagged(tagged) => Err(anyhow!(
            "Type tag '{}' is not allowed in safe mode",
            tagged.tag
        )),
        Value::Sequence(items) => items.iter().try_for_each(reject_tags),
        Value::Mapping(mapping) => mapping.iter().try_for_each(|(key, value)| {
            reject_tags(key)?;
            reject_tags(value)
        }),
        _ => Ok(()),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
