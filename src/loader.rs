//! Exit-policy loading operations.
//!
//! Each operation wraps the underlying failure with the caller's context
//! message and hands it to the configured [`FailureHandler`] before returning
//! it. With [`ExitOnFailure`] the process terminates there; other handlers
//! let the `Err` reach the caller.

use crate::document::{
    DocumentParser, JsonDocument, JsonParser, YamlDocument, YamlOptions, YamlParser,
};
use crate::files;
use crate::handler::{ExitOnFailure, FailureHandler};
use crate::paths;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub struct Loader<H: FailureHandler = ExitOnFailure> {
    handler: H,
    json: JsonParser,
    yaml: YamlParser,
}

impl Loader<ExitOnFailure> {
    /// Loader that prints and exits on failure
    pub fn new(yaml_options: YamlOptions) -> Self {
        Self::with_handler(ExitOnFailure, yaml_options)
    }
}

impl Default for Loader<ExitOnFailure> {
    fn default() -> Self {
        Self::new(YamlOptions::default())
    }
}

impl<H: FailureHandler> Loader<H> {
    pub fn with_handler(handler: H, yaml_options: YamlOptions) -> Self {
        Self {
            handler,
            json: JsonParser,
            yaml: YamlParser::new(yaml_options),
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    fn exit_on_error<T>(&self, result: Result<T>, error_message: &str) -> Result<T> {
        result.map_err(|err| {
            let failure = err.context(error_message.to_string());
            debug!("Load failed: {:#}", failure);
            self.handler.handle(&failure);
            failure
        })
    }

    /// Fail unless `path` exists and is a directory.
    ///
    /// The underlying [`paths::DirectoryError`] tells a missing path apart
    /// from one that is not a directory.
    pub fn assert_directory_exists(&self, path: &Path, error_message: &str) -> Result<()> {
        let result = paths::check_directory(path).map_err(anyhow::Error::from);
        self.exit_on_error(result, error_message)
    }

    /// Whole file contents with leading/trailing whitespace trimmed
    pub fn load_as_string(&self, path: &Path, error_message: &str) -> Result<String> {
        self.exit_on_error(files::read_trimmed(path), error_message)
    }

    /// File contents as lines, terminators preserved
    pub fn load_as_lines(&self, path: &Path, error_message: &str) -> Result<Vec<String>> {
        self.exit_on_error(files::read_lines(path), error_message)
    }

    /// Write `content` verbatim, creating missing parent directories
    pub fn write_string(&self, path: &Path, content: &str, error_message: &str) -> Result<()> {
        self.exit_on_error(files::write_string(path, content), error_message)
    }

    pub fn load_from_string<P: DocumentParser>(
        &self,
        parser: &P,
        text: &str,
        error_message: &str,
    ) -> Result<P::Document> {
        self.exit_on_error(parser.parse_str(text), error_message)
    }

    pub fn load_from_file<P: DocumentParser>(
        &self,
        parser: &P,
        path: &Path,
        error_message: &str,
    ) -> Result<P::Document> {
        self.exit_on_error(parser.parse_file(path), error_message)
    }

    pub fn json_from_string(&self, text: &str, error_message: &str) -> Result<JsonDocument> {
        self.load_from_string(&self.json, text, error_message)
    }

    pub fn json_from_file(&self, path: &Path, error_message: &str) -> Result<JsonDocument> {
        self.load_from_file(&self.json, path, error_message)
    }

    pub fn yaml_from_string(&self, text: &str, error_message: &str) -> Result<YamlDocument> {
        self.load_from_string(&self.yaml, text, error_message)
    }

    pub fn yaml_from_file(&self, path: &Path, error_message: &str) -> Result<YamlDocument> {
        self.load_from_file(&self.yaml, path, error_message)
    }
}
