//! Chart item model.
//!
//! A parsed chart is a flat sequence of [`ChartItem`]s, where timing groups
//! nest further items. Every field keeps the span of the token it was parsed
//! from, and every item additionally keeps the span of the whole event.
//!
//! Values are stored exactly as written. Negative times and durations are
//! legal here; rejecting them is the job of the semantic checker.

use crate::span::Spanned;

/// A chart item together with the span of the whole event.
pub type Item = Spanned<ChartItem>;

/// A tempo change: `timing(time,bpm,measure);`
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub time: Spanned<i64>,
    pub bpm: Spanned<f64>,
    /// Beats per segment.
    pub measure: Spanned<i64>,
}

/// A floor tap: `(time,lane);`
#[derive(Debug, Clone, PartialEq)]
pub struct Tap {
    pub time: Spanned<i64>,
}

/// A floor hold: `hold(start,end,lane);`
#[derive(Debug, Clone, PartialEq)]
pub struct Hold {
    pub start: Spanned<i64>,
    pub end: Spanned<i64>,
}

/// An arctap sitting on the timeline of its parent [`Arc`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArcTap {
    pub time: Spanned<i64>,
}

/// A continuous arc gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub start: Spanned<i64>,
    pub end: Spanned<i64>,
    pub x_start: Spanned<f64>,
    pub x_end: Spanned<f64>,
    pub y_start: Spanned<f64>,
    pub y_end: Spanned<f64>,
    /// Easing kind as a single character, e.g. `s` (straight) or `b` (bezier).
    pub arc_kind: Spanned<char>,
    pub effect: Spanned<String>,
    /// `true` for a thin trace line, `false` for a solid arc.
    pub is_line: Spanned<bool>,
    pub color_id: Spanned<i64>,
    /// `None` when the arc has no `[...]` arctap list at all.
    ///
    /// `Some` with an empty list is still "present".
    pub arctaps: Option<Spanned<Vec<Spanned<ArcTap>>>>,
}

impl Arc {
    /// Returns `true` if the arc carries an arctap list, even an empty one.
    pub fn has_arctaps(&self) -> bool {
        self.arctaps.is_some()
    }

    /// Returns `true` if the arc starts where it ends.
    pub fn is_zero_duration(&self) -> bool {
        *self.start == *self.end
    }
}

/// A camera motion event.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub duration: Spanned<i64>,
}

/// A scoped group of items: `timinggroup(){ ... };`
#[derive(Debug, Clone, PartialEq)]
pub struct TimingGroup {
    /// The braced body; its span covers the braces.
    pub items: Spanned<Vec<Item>>,
}

/// A single top-level or grouped chart event.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartItem {
    Timing(Timing),
    Tap(Tap),
    Hold(Hold),
    Arc(Arc),
    Camera(Camera),
    TimingGroup(TimingGroup),
}

impl ChartItem {
    /// The chart keyword for this kind of event.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ChartItem::Timing(_) => "timing",
            ChartItem::Tap(_) => "tap",
            ChartItem::Hold(_) => "hold",
            ChartItem::Arc(_) => "arc",
            ChartItem::Camera(_) => "camera",
            ChartItem::TimingGroup(_) => "timinggroup",
        }
    }
}

impl From<Timing> for ChartItem {
    fn from(timing: Timing) -> Self {
        ChartItem::Timing(timing)
    }
}

impl From<Tap> for ChartItem {
    fn from(tap: Tap) -> Self {
        ChartItem::Tap(tap)
    }
}

impl From<Hold> for ChartItem {
    fn from(hold: Hold) -> Self {
        ChartItem::Hold(hold)
    }
}

impl From<Arc> for ChartItem {
    fn from(arc: Arc) -> Self {
        ChartItem::Arc(arc)
    }
}

impl From<Camera> for ChartItem {
    fn from(camera: Camera) -> Self {
        ChartItem::Camera(camera)
    }
}

impl From<TimingGroup> for ChartItem {
    fn from(group: TimingGroup) -> Self {
        ChartItem::TimingGroup(group)
    }
}

/// A parsed chart for one song difficulty.
///
/// Items are kept in source order; that order is the order diagnostics are
/// reported in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    items: Vec<Item>,
}

impl Chart {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Top-level items in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of items, counting everything inside timing groups.
    pub fn total_items(&self) -> usize {
        fn count(items: &[Item]) -> usize {
            items
                .iter()
                .map(|item| match item.inner() {
                    ChartItem::TimingGroup(group) => 1 + count(&group.items),
                    _ => 1,
                })
                .sum()
        }
        count(&self.items)
    }
}

impl FromIterator<Item> for Chart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
