//! Semantic checking for parsed AFF charts.
//!
//! The parser guarantees that a chart is well formed; this crate reports
//! events that are well formed but wrong in game, such as negative
//! timestamps, zero-length holds, arctaps outside their arc, or solid arcs
//! using a reserved color. Findings are [`Diagnostic`]s with a stable
//! [`DiagnosticCode`] and a [`Severity`]; nothing in this crate fails or
//! modifies the chart.
//!
//! # Examples
//!
//! ```
//! use aff_check::{ChartChecker, DiagnosticCode};
//! use aff_core::{Camera, Chart, Span, Spanned};
//!
//! let camera = Camera {
//!     duration: Spanned::new(-1, Span::new(30..32)),
//! };
//! let chart = Chart::new(vec![Spanned::new(camera.into(), Span::new(0..40))]);
//!
//! let report = ChartChecker::default().check(&chart);
//! assert!(report.has_errors());
//! assert_eq!(
//!     report.diagnostics()[0].code(),
//!     DiagnosticCode::CameraNonNegativeDuration
//! );
//! ```

pub mod config;
pub mod error;

mod checker;
mod report;
mod visit;


pub use checker::{Checker, ValueRangeChecker, check, check_timestamp};
pub use error::{CheckError, Diagnostic, DiagnosticCode, Severity};
pub use report::Report;
pub use visit::Visitor;

use log::debug;

use aff_core::Chart;

use config::CheckConfig;

/// Front door for checking charts with a [`CheckConfig`].
///
/// Runs the [`ValueRangeChecker`] and drops suppressed codes from the
/// resulting [`Report`]. With a group depth limit configured, timing groups
/// past the limit are skipped and counted in [`Report::skipped_groups`];
/// such a report never passes.
#[derive(Debug, Clone, Default)]
pub struct ChartChecker {
    config: CheckConfig,
}

impl ChartChecker {
    /// Create a new chart checker with the given configuration.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Check a chart and collect the findings.
    pub fn check(&self, chart: &Chart) -> Report {
        let checker = ValueRangeChecker::new();
        debug!(
            checker = checker.name(),
            items = chart.len(),
            total_items = chart.total_items();
            "Checking chart"
        );

        let mut diagnostics = Vec::new();
        let skipped_groups = match self.config.max_group_depth() {
            Some(max) => checker::check_bounded(chart, max, &mut diagnostics),
            None => {
                checker.check(chart, &mut diagnostics);
                0
            }
        };

        let found = diagnostics.len();
        diagnostics.retain(|diag| !self.config.is_suppressed(diag.code()));

        let report = Report::new(diagnostics).with_skipped_groups(skipped_groups);
        debug!(
            found,
            reported = report.len(),
            errors = report.count(Severity::Error),
            skipped_groups;
            "Chart checked"
        );
        report
    }
}
