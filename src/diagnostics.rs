//! Colored terminal diagnostics.
//!
//! Errors go to stderr in red, informational messages to stdout in yellow.
//! The `exit_*` functions terminate the process with status 1 and are meant
//! for the outermost entry point or for [`crate::handler::ExitOnFailure`].

use crate::constants::FAILURE_EXIT_CODE;
use console::style;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the stream is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply the mode to both stdout and stderr process-wide
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => {
                console::set_colors_enabled(true);
                console::set_colors_enabled_stderr(true);
            }
            ColorMode::Never => {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
        }
    }
}

/// Lines printed for a failure: every underlying cause first, then the
/// context message the caller attached.
pub fn failure_lines(error: &anyhow::Error) -> Vec<String> {
    let mut lines: Vec<String> = error
        .chain()
        .skip(1)
        .map(|cause| cause.to_string())
        .collect();
    lines.push(error.to_string());
    lines
}

/// Lines printed for a message with an explicit cause; a multi-line cause
/// contributes one line each
pub fn cause_lines(message: &str, cause: &dyn Display) -> Vec<String> {
    let mut lines: Vec<String> = cause.to_string().lines().map(str::to_string).collect();
    lines.push(message.to_string());
    lines
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).red());
}

pub fn error_with_cause(message: &str, cause: &dyn Display) {
    for line in cause_lines(message, cause) {
        eprintln!("{}", style(line).red());
    }
}

pub fn info(message: &str) {
    println!("{}", style(message).yellow());
}

pub fn exit_with_error(message: &str) -> ! {
    error(message);
    std::process::exit(FAILURE_EXIT_CODE)
}

pub fn exit_with_cause(message: &str, cause: &dyn Display) -> ! {
    error_with_cause(message, cause);
    std::process::exit(FAILURE_EXIT_CODE)
}

/// Print a failure and exit: the bare message when it has no cause,
/// otherwise every cause followed by the context message
pub fn exit_with_failure(error: &anyhow::Error) -> ! {
    let message = error.to_string();
    let causes: Vec<String> = error.chain().skip(1).map(|cause| cause.to_string()).collect();

    if causes.is_empty() {
        exit_with_error(&message)
    }
    exit_with_cause(&message, &causes.join("\n"))
}
