//! Diagnostic codes for the chart checker.
//!
//! Codes are stable identifiers: reporters key localized text and
//! documentation off [`DiagnosticCode::as_str`], so a code is never renamed
//! once released.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Codes for categorizing semantic chart diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    // =========================================================================
    // Timestamps
    // =========================================================================
    /// Negative timestamp.
    ///
    /// A time, start or end field is below zero.
    TimestampNonNegative,

    // =========================================================================
    // Timing
    // =========================================================================
    /// Non-zero bpm with zero beats per segment.
    NonZeroBPMNonZeroBeats,

    /// Zero bpm with non-zero beats per segment.
    ZeroBPMZeroBeats,

    // =========================================================================
    // Hold
    // =========================================================================
    /// Hold does not end after it starts.
    HoldPositiveDuration,

    // =========================================================================
    // Arc
    // =========================================================================
    /// Arc ends before it starts.
    ArcNonNegativeDuration,

    /// Zero-length arc whose start and end points coincide.
    ///
    /// Such an arc has neither length in time nor in space and is invisible.
    ArcZeroDurationDifferentPoints,

    /// Zero-length arc that is not of the `s` (straight) kind.
    ArcZeroDurationSType,

    /// Zero-length arc carrying arctaps.
    ArcZeroDurationNoArctap,

    /// Arc effect that is neither `none` nor a `*_wav` sound effect.
    ArcEffectUnknown,

    /// Solid arc carrying arctaps.
    ///
    /// The game renders any arc with arctaps as a trace line.
    ArcArctapNotSolid,

    /// Solid arc using color 3.
    ArcSolidColor3,

    /// Arctap outside the time range of its arc.
    ArcArctapInTimeRange,

    // =========================================================================
    // Camera
    // =========================================================================
    /// Camera motion with a negative duration.
    CameraNonNegativeDuration,
}

impl DiagnosticCode {
    /// Every code, in declaration order.
    pub const ALL: [DiagnosticCode; 13] = [
        DiagnosticCode::TimestampNonNegative,
        DiagnosticCode::NonZeroBPMNonZeroBeats,
        DiagnosticCode::ZeroBPMZeroBeats,
        DiagnosticCode::HoldPositiveDuration,
        DiagnosticCode::ArcNonNegativeDuration,
        DiagnosticCode::ArcZeroDurationDifferentPoints,
        DiagnosticCode::ArcZeroDurationSType,
        DiagnosticCode::ArcZeroDurationNoArctap,
        DiagnosticCode::ArcEffectUnknown,
        DiagnosticCode::ArcArctapNotSolid,
        DiagnosticCode::ArcSolidColor3,
        DiagnosticCode::ArcArctapInTimeRange,
        DiagnosticCode::CameraNonNegativeDuration,
    ];

    /// Returns the stable identifier of the code (e.g. "TimestampNonNegative").
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::TimestampNonNegative => "TimestampNonNegative",
            DiagnosticCode::NonZeroBPMNonZeroBeats => "NonZeroBPMNonZeroBeats",
            DiagnosticCode::ZeroBPMZeroBeats => "ZeroBPMZeroBeats",
            DiagnosticCode::HoldPositiveDuration => "HoldPositiveDuration",
            DiagnosticCode::ArcNonNegativeDuration => "ArcNonNegativeDuration",
            DiagnosticCode::ArcZeroDurationDifferentPoints => "ArcZeroDurationDifferentPoints",
            DiagnosticCode::ArcZeroDurationSType => "ArcZeroDurationSType",
            DiagnosticCode::ArcZeroDurationNoArctap => "ArcZeroDurationNoArctap",
            DiagnosticCode::ArcEffectUnknown => "ArcEffectUnknown",
            DiagnosticCode::ArcArctapNotSolid => "ArcArctapNotSolid",
            DiagnosticCode::ArcSolidColor3 => "ArcSolidColor3",
            DiagnosticCode::ArcArctapInTimeRange => "ArcArctapInTimeRange",
            DiagnosticCode::CameraNonNegativeDuration => "CameraNonNegativeDuration",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::TimestampNonNegative => "negative timestamp",
            DiagnosticCode::NonZeroBPMNonZeroBeats => "zero beats with non-zero bpm",
            DiagnosticCode::ZeroBPMZeroBeats => "non-zero beats with zero bpm",
            DiagnosticCode::HoldPositiveDuration => "hold without positive duration",
            DiagnosticCode::ArcNonNegativeDuration => "arc with negative duration",
            DiagnosticCode::ArcZeroDurationDifferentPoints => "zero-length arc without movement",
            DiagnosticCode::ArcZeroDurationSType => "zero-length arc not of s type",
            DiagnosticCode::ArcZeroDurationNoArctap => "zero-length arc with arctaps",
            DiagnosticCode::ArcEffectUnknown => "unknown arc effect",
            DiagnosticCode::ArcArctapNotSolid => "solid arc with arctaps",
            DiagnosticCode::ArcSolidColor3 => "solid arc with color 3",
            DiagnosticCode::ArcArctapInTimeRange => "arctap outside arc",
            DiagnosticCode::CameraNonNegativeDuration => "camera with negative duration",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
