//! Read-only traversal of chart items.
//!
//! [`Visitor`] walks a [`Chart`] depth-first in source order. Implementors
//! override the per-event hooks they care about; the default for every event
//! is to do nothing, except timing groups, which recurse into their items.
//!
//! [`Visitor::visit_item`] matches every [`ChartItem`] variant explicitly, so
//! a new event kind cannot be added without deciding how it is visited.

use aff_core::{Arc, Camera, Chart, ChartItem, Hold, Item, Span, Tap, Timing, TimingGroup};

/// Visitor trait for traversing chart items.
///
/// Every hook receives the span of the whole event next to its payload.
pub trait Visitor {
    /// Visit a complete chart
    fn visit_chart(&mut self, chart: &Chart) {
        self.visit_items(chart.items());
    }

    /// Visit a sequence of items in order
    fn visit_items(&mut self, items: &[Item]) {
        for item in items {
            self.visit_item(item);
        }
    }

    /// Dispatch a single item to its variant hook
    fn visit_item(&mut self, item: &Item) {
        let span = item.span();
        match item.inner() {
            ChartItem::Timing(timing) => self.visit_timing(timing, span),
            ChartItem::Tap(tap) => self.visit_tap(tap, span),
            ChartItem::Hold(hold) => self.visit_hold(hold, span),
            ChartItem::Arc(arc) => self.visit_arc(arc, span),
            ChartItem::Camera(camera) => self.visit_camera(camera, span),
            ChartItem::TimingGroup(group) => self.visit_timing_group(group, span),
        }
    }

    fn visit_timing(&mut self, _timing: &Timing, _span: Span) {}

    fn visit_tap(&mut self, _tap: &Tap, _span: Span) {}

    fn visit_hold(&mut self, _hold: &Hold, _span: Span) {}

    fn visit_arc(&mut self, _arc: &Arc, _span: Span) {}

    fn visit_camera(&mut self, _camera: &Camera, _span: Span) {}

    /// Visit a timing group; recurses into its items by default
    fn visit_timing_group(&mut self, group: &TimingGroup, _span: Span) {
        self.visit_items(&group.items);
    }
}
