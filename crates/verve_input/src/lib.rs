//! Verve Input Trackers
//!
//! Event-driven producers for the value graph:
//!
//! - [`ScrollTracker`] republishes a target element's travel through a
//!   configured viewport window as a normalized progress node
//! - [`PointerTracker`] republishes pointer offsets relative to the scene's
//!   bounding-box center as a pair of nodes
//!
//! Trackers recompute from the geometry carried on each event (layout may
//! shift between events, so nothing is cached) and stage the result; the
//! frame driver flushes staged values into the graph once per tick, which
//! coalesces any number of events into at most one node update per frame.

pub mod pointer;
pub mod scroll;

pub use pointer::PointerTracker;
pub use scroll::{Edge, EdgeCrossing, OffsetWindow, ScrollTracker};
