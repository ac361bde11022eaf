//! File, JSON and YAML loading helpers for command-line tools.
//!
//! Every loading operation comes in two flavours. Propagating functions
//! ([`files`], [`document::DocumentParser`]) return the underlying error
//! unchanged. Exit-policy operations on [`Loader`] attach a context message
//! and pass the failure to a [`FailureHandler`], which by default prints it
//! and terminates the process with status 1.

pub mod commands;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod document;
pub mod files;
pub mod handler;
pub mod loader;
pub mod paths;

pub use document::{DocumentParser, JsonParser, YamlOptions, YamlParser};
pub use handler::{ExitOnFailure, FailureHandler, RecordFailures};
pub use loader::Loader;
pub use paths::{DirectoryError, PathResolver};
