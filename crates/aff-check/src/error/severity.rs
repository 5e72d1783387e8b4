//! Severity levels for diagnostics.
//!
//! This module defines the severity of diagnostic messages, from findings
//! that make a chart unplayable down to purely informational notes.

use std::fmt;

use serde::Serialize;

/// The severity level of a diagnostic.
///
/// Variants are listed from most to least actionable. Deciding what a
/// severity means for an exit code is left to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The chart is wrong and will misbehave in game.
    Error,

    /// The chart is probably not what the author intended.
    Warning,

    /// A notable but harmless condition.
    Info,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns `true` if this is an info severity.
    pub fn is_info(&self) -> bool {
        matches!(self, Severity::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
