//! AFF Core Types
//!
//! This crate provides the parsed representation of an AFF rhythm-game chart
//! that the checkers in `aff-check` walk over:
//!
//! - **Spans**: Source locations and location-tagged values ([`span`] module)
//! - **Chart**: The closed set of chart events and the chart document ([`chart`] module)

pub mod chart;
pub mod span;

pub use chart::{Arc, ArcTap, Camera, Chart, ChartItem, Hold, Item, Tap, Timing, TimingGroup};
pub use span::{Span, Spanned};
