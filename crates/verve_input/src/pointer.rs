//! Pointer offset tracking
//!
//! Converts pointer coordinates into offsets relative to the scene
//! container's center and publishes them as two graph nodes (dx, dy). The
//! container rect arrives on every event because layout may shift; nothing
//! is cached. Any number of moves per frame coalesce into one node update
//! at flush time.

use verve_core::geometry::{Point, Rect, Vec2};
use verve_core::value::{NodeId, ValueGraph};

/// Publishes center-relative pointer offsets into the value graph
pub struct PointerTracker {
    dx_node: NodeId,
    dy_node: NodeId,
    offset: Vec2,
    pending_moves: u32,
}

impl PointerTracker {
    pub fn new(graph: &mut ValueGraph) -> Self {
        Self {
            dx_node: graph.create_source(0.0),
            dy_node: graph.create_source(0.0),
            offset: Vec2::ZERO,
            pending_moves: 0,
        }
    }

    pub fn dx_node(&self) -> NodeId {
        self.dx_node
    }

    pub fn dy_node(&self) -> NodeId {
        self.dy_node
    }

    /// Latest staged offset (may not be published yet).
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Moves staged since the last flush.
    pub fn pending_moves(&self) -> u32 {
        self.pending_moves
    }

    /// Stage a pointer move against the container rect current at event
    /// time.
    pub fn on_pointer_move(&mut self, position: Point, container: Rect) {
        let center = container.center();
        self.offset = Vec2::new(position.x - center.x, position.y - center.y);
        self.pending_moves += 1;
    }

    /// Publish the staged offsets; at most one update per node per frame.
    pub fn flush(&mut self, graph: &mut ValueGraph) -> bool {
        if self.pending_moves == 0 {
            return false;
        }
        self.pending_moves = 0;
        let dx = graph.set_if_changed(self.dx_node, self.offset.x).unwrap_or(false);
        let dy = graph.set_if_changed(self.dy_node, self.offset.y).unwrap_or(false);
        dx || dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(100.0, 100.0, 424.0, 424.0)
    }

    #[test]
    fn offsets_are_center_relative() {
        let mut graph = ValueGraph::new();
        let mut tracker = PointerTracker::new(&mut graph);

        // Container center is (312, 312).
        tracker.on_pointer_move(Point::new(312.0, 312.0), container());
        tracker.flush(&mut graph);
        assert_eq!(graph.get(tracker.dx_node()), Some(0.0));
        assert_eq!(graph.get(tracker.dy_node()), Some(0.0));

        tracker.on_pointer_move(Point::new(612.0, 212.0), container());
        tracker.flush(&mut graph);
        assert_eq!(graph.get(tracker.dx_node()), Some(300.0));
        assert_eq!(graph.get(tracker.dy_node()), Some(-100.0));
    }

    #[test]
    fn moves_coalesce_to_one_update_per_frame() {
        let mut graph = ValueGraph::new();
        let mut tracker = PointerTracker::new(&mut graph);
        let dx = tracker.dx_node();
        let v0 = graph.version(dx).unwrap();

        for i in 0..10 {
            tracker.on_pointer_move(Point::new(320.0 + i as f32, 312.0), container());
        }
        assert_eq!(tracker.pending_moves(), 10);
        assert!(tracker.flush(&mut graph));
        // Only the last staged offset was published, in a single write.
        assert_eq!(graph.version(dx), Some(v0 + 1));
        assert_eq!(graph.get(dx), Some(17.0));

        assert!(!tracker.flush(&mut graph));
    }

    #[test]
    fn shifted_container_changes_offsets() {
        let mut graph = ValueGraph::new();
        let mut tracker = PointerTracker::new(&mut graph);

        tracker.on_pointer_move(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 200.0, 200.0));
        tracker.flush(&mut graph);
        assert_eq!(graph.get(tracker.dx_node()), Some(-100.0));

        // Same pointer position, moved layout.
        tracker.on_pointer_move(Point::new(0.0, 0.0), Rect::new(-200.0, 0.0, 200.0, 200.0));
        tracker.flush(&mut graph);
        assert_eq!(graph.get(tracker.dx_node()), Some(100.0));
    }
}
