//! The CheckError type for failed chart checks.
//!
//! [`CheckError`] wraps the diagnostics of a check that produced at least one
//! error-severity finding or skipped part of the chart, for callers that want
//! a plain `Result`.

use std::fmt;

use thiserror::Error;

use crate::error::Diagnostic;

/// A chart check that found at least one error or did not cover the whole
/// chart.
///
/// Holds every diagnostic of the check, warnings and infos included, in
/// traversal order, plus the number of timing groups left unchecked.
#[derive(Debug, Error)]
#[error("{}", Summary(.diagnostics, .skipped_groups))]
pub struct CheckError {
    diagnostics: Vec<Diagnostic>,
    skipped_groups: usize,
}

impl CheckError {
    /// Create a new check error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            skipped_groups: 0,
        }
    }

    /// Record that `count` timing groups were not checked.
    pub fn with_skipped_groups(mut self, count: usize) -> Self {
        self.skipped_groups = count;
        self
    }

    /// Number of timing groups the check did not descend into.
    pub fn skipped_groups(&self) -> usize {
        self.skipped_groups
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the error and return its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
            .count()
    }
}

struct Summary<'a>(&'a [Diagnostic], &'a usize);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(diagnostics, &skipped) = *self;
        if let Some(first) = diagnostics.first() {
            write!(f, "{first}")?;
            if diagnostics.len() > 1 {
                write!(f, " (+{} more)", diagnostics.len() - 1)?;
            }
        }
        if skipped > 0 {
            if !diagnostics.is_empty() {
                write!(f, "; ")?;
            }
            write!(
                f,
                "{skipped} timing group(s) nested past the depth limit were not checked"
            )?;
        }
        Ok(())
    }
}
