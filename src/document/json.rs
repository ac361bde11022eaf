use super::DocumentParser;
use anyhow::Result;
use serde_json::{Map, Value};

pub type JsonDocument = Map<String, Value>;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    type Document = JsonDocument;

    const FORMAT: &'static str = "JSON";

    fn parse_str(&self, text: &str) -> Result<JsonDocument> {
        Ok(serde_json::from_str(text)?)
    }
}
