//! Semantic checks on chart item values.
//!
//! The [`ValueRangeChecker`] looks at each event on its own and reports values
//! that parse fine but make no sense in game. It keeps no state between
//! items, so sibling events are never compared against each other.
//!
//! ## Rules
//!
//! | Event  | Finding                                         | Code                             |
//! |--------|-------------------------------------------------|----------------------------------|
//! | all    | negative time/start/end                         | `TimestampNonNegative`           |
//! | timing | non-zero bpm with zero beats                    | `NonZeroBPMNonZeroBeats`         |
//! | timing | zero bpm with non-zero beats (info)             | `ZeroBPMZeroBeats`               |
//! | hold   | `start >= end`                                  | `HoldPositiveDuration`           |
//! | arc    | `start > end`                                   | `ArcNonNegativeDuration`         |
//! | arc    | zero length, start point equals end point       | `ArcZeroDurationDifferentPoints` |
//! | arc    | zero length, not `s` kind (info)                | `ArcZeroDurationSType`           |
//! | arc    | zero length, arctap list present                | `ArcZeroDurationNoArctap`        |
//! | arc    | effect neither `none` nor `*_wav` (warning)     | `ArcEffectUnknown`               |
//! | arc    | solid with arctap list (warning)                | `ArcArctapNotSolid`              |
//! | arc    | solid, no arctap list, color 3                  | `ArcSolidColor3`                 |
//! | arctap | outside `[start, end]` of its arc               | `ArcArctapInTimeRange`           |
//! | camera | negative duration                               | `CameraNonNegativeDuration`      |

use log::{trace, warn};

use aff_core::{Arc, Camera, Chart, Hold, Span, Spanned, Tap, Timing, TimingGroup};

use crate::{
    error::{Diagnostic, DiagnosticCode},
    visit::Visitor,
};

/// Effect name meaning "no effect".
const EFFECT_NONE: &str = "none";

/// Suffix shared by all sound effect names.
const EFFECT_SOUND_SUFFIX: &str = "_wav";

/// Color id that solid arcs may not use.
const RESERVED_SOLID_COLOR: i64 = 3;

/// Arc kind allowed for zero-length arcs.
const STRAIGHT_ARC_KIND: char = 's';

/// A semantic check over a whole chart.
///
/// Checkers only ever append to `diagnostics`; they never read, reorder or
/// clear what is already there, so several checkers can share one output.
pub trait Checker {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Check `chart` and append findings to `diagnostics` in traversal order.
    fn check(&self, chart: &Chart, diagnostics: &mut Vec<Diagnostic>);
}

/// Checks that every event's values are in range and mutually consistent.
///
/// Always walks the whole chart, however deeply timing groups nest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueRangeChecker;

impl ValueRangeChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Checker for ValueRangeChecker {
    fn name(&self) -> &'static str {
        "value-range"
    }

    fn check(&self, chart: &Chart, diagnostics: &mut Vec<Diagnostic>) {
        RangeVisitor::new(diagnostics, None).visit_chart(chart);
    }
}

/// Run the value-range checks on `chart`, appending to `diagnostics`.
///
/// Diagnostics come out in depth-first source order; the contents of a
/// timing group appear where the group is. Running this twice on the same
/// chart produces identical output.
pub fn check(chart: &Chart, diagnostics: &mut Vec<Diagnostic>) {
    ValueRangeChecker::new().check(chart, diagnostics);
}

/// Run the value-range checks without descending past `max_group_depth`
/// nested timing groups.
///
/// Top-level items are at depth 0 and are always checked. Returns how many
/// timing groups were skipped; their contents produce no diagnostics, so a
/// non-zero count means the output is incomplete.
pub(crate) fn check_bounded(
    chart: &Chart,
    max_group_depth: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let mut visitor = RangeVisitor::new(diagnostics, Some(max_group_depth));
    visitor.visit_chart(chart);
    visitor.skipped_groups
}

/// Report `timestamp` if it is negative.
pub fn check_timestamp(timestamp: &Spanned<i64>, diagnostics: &mut Vec<Diagnostic>) {
    if **timestamp < 0 {
        emit(
            diagnostics,
            Diagnostic::error(
                DiagnosticCode::TimestampNonNegative,
                "Timestamp should not be negative",
                timestamp.span(),
            ),
        );
    }
}

fn emit(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    trace!(
        code:% = diagnostic.code(),
        severity:% = diagnostic.severity(),
        span:% = diagnostic.span();
        "Chart diagnostic"
    );
    diagnostics.push(diagnostic);
}

struct RangeVisitor<'a> {
    diagnostics: &'a mut Vec<Diagnostic>,
    depth: usize,
    max_group_depth: Option<usize>,
    skipped_groups: usize,
}

impl<'a> RangeVisitor<'a> {
    fn new(diagnostics: &'a mut Vec<Diagnostic>, max_group_depth: Option<usize>) -> Self {
        Self {
            diagnostics,
            depth: 0,
            max_group_depth,
            skipped_groups: 0,
        }
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        emit(self.diagnostics, diagnostic);
    }

    fn check_timestamp(&mut self, timestamp: &Spanned<i64>) {
        check_timestamp(timestamp, self.diagnostics);
    }

    fn check_zero_duration_arc(&mut self, arc: &Arc, span: Span) {
        if *arc.x_start == *arc.x_end && *arc.y_start == *arc.y_end {
            self.emit(Diagnostic::error(
                DiagnosticCode::ArcZeroDurationDifferentPoints,
                "Arc event with zero time length should have different start point and end point",
                span,
            ));
        }
        if *arc.arc_kind != STRAIGHT_ARC_KIND {
            self.emit(Diagnostic::info(
                DiagnosticCode::ArcZeroDurationSType,
                "Arc event with zero time length should be \"s\" type",
                arc.arc_kind.span(),
            ));
        }
        if let Some(arctaps) = &arc.arctaps {
            self.emit(Diagnostic::error(
                DiagnosticCode::ArcZeroDurationNoArctap,
                "Arc event with zero time length should not have arctap events on it",
                arctaps.span(),
            ));
        }
    }
}

impl Visitor for RangeVisitor<'_> {
    fn visit_timing(&mut self, timing: &Timing, _span: Span) {
        self.check_timestamp(&timing.time);

        let zero_bpm = *timing.bpm == 0.0;
        let zero_measure = *timing.measure == 0;
        if !zero_bpm && zero_measure {
            self.emit(Diagnostic::error(
                DiagnosticCode::NonZeroBPMNonZeroBeats,
                "Timing event with non-zero bpm should not have zero beats per segment",
                timing.measure.span(),
            ));
        }
        if zero_bpm && !zero_measure {
            self.emit(Diagnostic::info(
                DiagnosticCode::ZeroBPMZeroBeats,
                "Timing event with zero bpm should have zero beats per segment",
                timing.measure.span(),
            ));
        }
    }

    fn visit_tap(&mut self, tap: &Tap, _span: Span) {
        self.check_timestamp(&tap.time);
    }

    fn visit_hold(&mut self, hold: &Hold, span: Span) {
        self.check_timestamp(&hold.start);
        self.check_timestamp(&hold.end);
        if *hold.start >= *hold.end {
            self.emit(Diagnostic::error(
                DiagnosticCode::HoldPositiveDuration,
                "Hold event should have a positive time length",
                span,
            ));
        }
    }

    fn visit_arc(&mut self, arc: &Arc, span: Span) {
        self.check_timestamp(&arc.start);
        self.check_timestamp(&arc.end);
        if *arc.start > *arc.end {
            self.emit(Diagnostic::error(
                DiagnosticCode::ArcNonNegativeDuration,
                "Arc event should have a non-negative time length",
                span,
            ));
        }
        if arc.is_zero_duration() {
            self.check_zero_duration_arc(arc, span);
        }

        let effect = arc.effect.inner();
        if effect != EFFECT_NONE && !effect.ends_with(EFFECT_SOUND_SUFFIX) {
            self.emit(Diagnostic::warning(
                DiagnosticCode::ArcEffectUnknown,
                format!("Arc event with effect \"{effect}\"  is not known by us"),
                arc.effect.span(),
            ));
        }

        if !*arc.is_line {
            if arc.has_arctaps() {
                self.emit(Diagnostic::warning(
                    DiagnosticCode::ArcArctapNotSolid,
                    "Arc event with arctap events on it will be treated as not solid even it is specified as solid",
                    arc.is_line.span(),
                ));
            } else if *arc.color_id == RESERVED_SOLID_COLOR {
                self.emit(Diagnostic::error(
                    DiagnosticCode::ArcSolidColor3,
                    "Solid arc event should not use the color 3",
                    arc.color_id.span(),
                ));
            }
        }

        if let Some(arctaps) = &arc.arctaps {
            for arctap in arctaps.iter() {
                let time = *arctap.time;
                if time < *arc.start || time > *arc.end {
                    self.emit(Diagnostic::error(
                        DiagnosticCode::ArcArctapInTimeRange,
                        "Arctap event should happens in the time range of parent arc event",
                        arctap.span(),
                    ));
                }
            }
        }
    }

    fn visit_camera(&mut self, camera: &Camera, _span: Span) {
        if *camera.duration < 0 {
            self.emit(Diagnostic::error(
                DiagnosticCode::CameraNonNegativeDuration,
                "Camera event should have non negative duration",
                camera.duration.span(),
            ));
        }
    }

    fn visit_timing_group(&mut self, group: &TimingGroup, span: Span) {
        let depth = self.depth + 1;
        if self.max_group_depth.is_some_and(|max| depth > max) {
            warn!(
                depth,
                items = group.items.len(),
                span:% = span;
                "Skipping timing group nested beyond the depth limit"
            );
            self.skipped_groups += 1;
            return;
        }

        self.depth = depth;
        self.visit_items(&group.items);
        self.depth -= 1;
    }
}
