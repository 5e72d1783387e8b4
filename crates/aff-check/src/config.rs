//! Configuration for chart checking.
//!
//! [`CheckConfig`] implements [`serde::Deserialize`] so it can be embedded in
//! a tool's own configuration file, or parsed on its own from TOML:
//!
//! ```toml
//! # Codes dropped from the report
//! suppress = ["ArcEffectUnknown", "ZeroBPMZeroBeats"]
//!
//! # Do not look inside timing groups nested more than two levels deep
//! max_group_depth = 2
//! ```
//!
//! Skipped groups are counted in the report, which then fails
//! [`Report::into_result`](crate::Report::into_result).
//!
//! The default configuration reports everything and walks groups to any depth.

use serde::Deserialize;
use thiserror::Error;

use crate::error::DiagnosticCode;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for [`ChartChecker`](crate::ChartChecker).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Diagnostic codes removed from the report.
    #[serde(default)]
    suppress: Vec<DiagnosticCode>,

    /// Maximum timing group nesting that is checked.
    #[serde(default)]
    max_group_depth: Option<usize>,
}

impl CheckConfig {
    /// Creates a new [`CheckConfig`].
    ///
    /// # Arguments
    ///
    /// * `suppress` - Codes removed from the report.
    /// * `max_group_depth` - Deepest timing group nesting to check, `None` for no limit.
    pub fn new(suppress: Vec<DiagnosticCode>, max_group_depth: Option<usize>) -> Self {
        Self {
            suppress,
            max_group_depth,
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML, names an
    /// unknown diagnostic code, or contains unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the suppressed codes.
    pub fn suppress(&self) -> &[DiagnosticCode] {
        &self.suppress
    }

    /// Returns `true` if diagnostics with `code` are dropped from the report.
    pub fn is_suppressed(&self, code: DiagnosticCode) -> bool {
        self.suppress.contains(&code)
    }

    /// Returns the nesting limit for timing groups.
    pub fn max_group_depth(&self) -> Option<usize> {
        self.max_group_depth
    }
}
