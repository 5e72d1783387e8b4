//! Diagnostic system for the chart checker.
//!
//! This module provides:
//! - Stable diagnostic codes for reporters to key messages off
//! - Severity levels
//! - The immutable [`Diagnostic`] record emitted by checkers
//! - [`CheckError`] for callers that want a failed check as a `Result`
//!
//! # Example
//!
//! ```
//! # use aff_check::error::{Diagnostic, DiagnosticCode, Severity};
//! # use aff_core::Span;
//! let diag = Diagnostic::error(
//!     DiagnosticCode::TimestampNonNegative,
//!     "Timestamp should not be negative",
//!     Span::new(7..10),
//! );
//!
//! assert_eq!(diag.severity(), Severity::Error);
//! assert_eq!(diag.code().as_str(), "TimestampNonNegative");
//! ```

mod check_error;
mod diagnostic;
mod diagnostic_code;
mod severity;

pub use check_error::CheckError;
pub use diagnostic::Diagnostic;
pub use diagnostic_code::DiagnosticCode;
pub use severity::Severity;
