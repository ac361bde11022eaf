//! Failure handlers for the exit policy.

use crate::diagnostics::{self, failure_lines};
use std::cell::RefCell;

/// Receives every failure raised under the exit policy.
///
/// A handler that returns lets the `Err` flow back to the caller, so the
/// loader stays usable in tests.
pub trait FailureHandler {
    fn handle(&self, failure: &anyhow::Error);
}

/// Print the failure (causes, then context) in red and exit with status 1
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitOnFailure;

impl FailureHandler for ExitOnFailure {
    fn handle(&self, failure: &anyhow::Error) {
        diagnostics::exit_with_failure(failure)
    }
}

/// Keep the rendered lines of each failure instead of terminating
#[derive(Debug, Default)]
pub struct RecordFailures {
    failures: RefCell<Vec<Vec<String>>>,
}

impl RecordFailures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines of every recorded failure, oldest first
    pub fn failures(&self) -> Vec<Vec<String>> {
        self.failures.borrow().clone()
    }

    pub fn last(&self) -> Option<Vec<String>> {
        self.failures.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.failures.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }
}

impl FailureHandler for RecordFailures {
    fn handle(&self, failure: &anyhow::Error) {
        self.failures.borrow_mut().push(failure_lines(failure));
    }
}

impl<H: FailureHandler + ?Sized> FailureHandler for &H {
    fn handle(&self, failure: &anyhow::Error) {
        (**self).handle(failure)
    }
}
