//! Results of a chart check.

use crate::error::{CheckError, Diagnostic, DiagnosticCode, Severity};

/// The diagnostics produced by one [`ChartChecker::check`](crate::ChartChecker::check) run.
///
/// Diagnostics are kept in traversal order. A report never decides on its
/// own whether the chart "passed"; [`Report::has_errors`] and
/// [`Report::into_result`] are conveniences for callers that treat any
/// error-severity finding as a failure.
///
/// A check run with a group depth limit may leave timing groups unchecked.
/// Such a report is incomplete and never counts as passing, even with no
/// diagnostics at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
    skipped_groups: usize,
}

impl Report {
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

    /// Returns `true` if every item of the chart was checked.
    pub fn is_complete(&self) -> bool {
        self.skipped_groups == 0
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns `true` if any diagnostic has [`Severity::Error`] or the
    /// check skipped part of the chart.
    pub fn has_errors(&self) -> bool {
        !self.is_complete()
            || self
                .diagnostics
                .iter()
                .any(|diag| diag.severity().is_error())
    }

    /// Number of diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity() == severity)
            .count()
    }

    /// Diagnostics with the given code, in order.
    pub fn by_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.code() == code)
    }

    /// Convert into a `Result`, failing if any diagnostic is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] holding every diagnostic when at least one
    /// has [`Severity::Error`] or when timing groups were skipped. Otherwise
    /// the warnings and infos are returned.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, CheckError> {
        if self.has_errors() {
            Err(CheckError::new(self.diagnostics).with_skipped_groups(self.skipped_groups))
        } else {
            Ok(self.diagnostics)
        }
    }
}
