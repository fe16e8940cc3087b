//! Scroll progress tracking
//!
//! Watches a target element's position within the viewport and publishes a
//! normalized progress value: 0 at the configured enter crossing, 1 at the
//! configured exit crossing, clamped outside the window. Geometry arrives
//! on every scroll/resize event and is never cached; element size may
//! change between events.

use serde::{Deserialize, Serialize};

use verve_core::events::Viewport;
use verve_core::geometry::Rect;
use verve_core::value::{NodeId, ValueGraph};

/// A position along an element or viewport extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    fn fraction(self) -> f32 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// One progress endpoint: the scroll position where an element edge meets a
/// viewport edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCrossing {
    pub element: Edge,
    pub viewport: Edge,
}

impl EdgeCrossing {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// The document scroll offset at which this crossing occurs.
    fn scroll_offset(&self, viewport: Viewport, target: Rect) -> f32 {
        let element_pos = target.top() + self.element.fraction() * target.height();
        element_pos - self.viewport.fraction() * viewport.height
    }
}

/// The scroll window mapped onto [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetWindow {
    pub start: EdgeCrossing,
    pub end: EdgeCrossing,
}

impl OffsetWindow {
    /// Progress 0 when the element's top enters the viewport bottom,
    /// 1 when its bottom exits the viewport top.
    pub fn enter_to_exit() -> Self {
        Self {
            start: EdgeCrossing::new(Edge::Start, Edge::End),
            end: EdgeCrossing::new(Edge::End, Edge::Start),
        }
    }

    /// Progress for the current geometry, clamped to [0, 1].
    pub fn progress(&self, viewport: Viewport, target: Rect) -> f32 {
        let start = self.start.scroll_offset(viewport, target);
        let end = self.end.scroll_offset(viewport, target);
        let span = end - start;
        if span.abs() < 1e-6 {
            return if viewport.scroll_y >= end { 1.0 } else { 0.0 };
        }
        ((viewport.scroll_y - start) / span).clamp(0.0, 1.0)
    }
}

impl Default for OffsetWindow {
    fn default() -> Self {
        Self::enter_to_exit()
    }
}

/// Publishes scroll progress into a value graph node
pub struct ScrollTracker {
    window: OffsetWindow,
    node: NodeId,
    progress: f32,
    dirty: bool,
}

impl ScrollTracker {
    pub fn new(graph: &mut ValueGraph, window: OffsetWindow) -> Self {
        let node = graph.create_source(0.0);
        Self {
            window,
            node,
            progress: 0.0,
            dirty: false,
        }
    }

    /// The progress node other graph nodes read from.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Recompute progress from this event's geometry. Also the handler for
    /// resize events and the initial measurement at mount.
    pub fn on_scroll(&mut self, viewport: Viewport, target: Rect) {
        self.progress = self.window.progress(viewport, target);
        self.dirty = true;
    }

    /// Publish the staged progress; at most one node update per frame.
    pub fn flush(&mut self, graph: &mut ValueGraph) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        graph.set_if_changed(self.node, self.progress).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f32) -> Viewport {
        Viewport::new(scroll_y, 600.0)
    }

    // Element of height 400 whose top sits at document y = 1000.
    fn target() -> Rect {
        Rect::new(0.0, 1000.0, 800.0, 400.0)
    }

    #[test]
    fn progress_is_zero_before_enter_and_one_after_exit() {
        let w = OffsetWindow::enter_to_exit();
        assert_eq!(w.progress(viewport(0.0), target()), 0.0);
        assert_eq!(w.progress(viewport(400.0), target()), 0.0);
        assert_eq!(w.progress(viewport(1400.0), target()), 1.0);
        assert_eq!(w.progress(viewport(2000.0), target()), 1.0);
    }

    #[test]
    fn progress_is_monotonic_through_the_window() {
        let w = OffsetWindow::enter_to_exit();
        let mut last = -1.0;
        for i in 0..=40 {
            let scroll = i as f32 * 50.0;
            let p = w.progress(viewport(scroll), target());
            assert!(p >= last, "regressed at scroll {scroll}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn midpoint_of_window() {
        // Window spans scroll 400..=1400 for this geometry.
        let w = OffsetWindow::enter_to_exit();
        assert!((w.progress(viewport(900.0), target()) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn center_crossings() {
        let w = OffsetWindow {
            start: EdgeCrossing::new(Edge::Center, Edge::Center),
            end: EdgeCrossing::new(Edge::End, Edge::Start),
        };
        // Element center (1200) meets viewport center (scroll + 300).
        assert_eq!(w.progress(viewport(900.0), target()), 0.0);
        assert!(w.progress(viewport(1000.0), target()) > 0.0);
    }

    #[test]
    fn tracker_publishes_once_per_flush() {
        let mut graph = ValueGraph::new();
        let mut tracker = ScrollTracker::new(&mut graph, OffsetWindow::default());
        let node = tracker.node();

        // Several events within one frame coalesce to one write.
        tracker.on_scroll(viewport(500.0), target());
        tracker.on_scroll(viewport(650.0), target());
        tracker.on_scroll(viewport(900.0), target());
        let v0 = graph.version(node).unwrap();
        assert!(tracker.flush(&mut graph));
        assert_eq!(graph.version(node), Some(v0 + 1));
        assert!((graph.get(node).unwrap() - 0.5).abs() < 1e-6);

        // Nothing staged, nothing written.
        assert!(!tracker.flush(&mut graph));
    }

    #[test]
    fn resize_changes_progress_for_same_scroll() {
        let w = OffsetWindow::enter_to_exit();
        let tall = Viewport::new(900.0, 600.0);
        let short = Viewport::new(900.0, 300.0);
        assert!(w.progress(tall, target()) != w.progress(short, target()));
    }
}
