//! The Diagnostic type.
//!
//! A [`Diagnostic`] is a single semantic finding: what is wrong, which rule
//! found it, how serious it is, and where in the chart source it is.

use std::fmt;

use serde::Serialize;

use aff_core::Span;

use crate::error::{DiagnosticCode, Severity};

/// A single finding reported by a chart checker.
///
/// Diagnostics are immutable once built and are never merged or
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    message: String,
    code: DiagnosticCode,
    severity: Severity,
    span: Span,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit severity.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            message: message.into(),
            code,
            severity,
            span,
        }
    }

    /// Create an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    /// Create a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    /// Create an informational diagnostic.
    pub fn info(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Info, code, message, span)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The source location the diagnostic points at.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}
