//! Verve Core Runtime
//!
//! This crate provides the foundational primitives for the Verve motion
//! engine:
//!
//! - **Value Graph**: versioned observable scalars with derived, range-mapped
//!   nodes evaluated in dependency order
//! - **Range Mapping**: piecewise-linear domain-to-range interpolation with
//!   optional clamping
//! - **Event Hub**: input event fan-out with removable subscriptions
//! - **Geometry**: the small set of 2D types the engine computes with
//!
//! # Example
//!
//! ```rust
//! use verve_core::value::ValueGraph;
//! use verve_core::mapper::RangeMapper;
//!
//! let mut graph = ValueGraph::new();
//!
//! // A raw input node (e.g. scroll progress).
//! let progress = graph.create_source(0.0);
//!
//! // A derived node: progress in [0, 1] mapped to a parallax offset.
//! let mapper = RangeMapper::new(vec![0.0, 1.0], vec![0.0, -50.0]).unwrap();
//! let offset = graph.create_mapped(progress, mapper).unwrap();
//!
//! graph.set(progress, 0.5).unwrap();
//! graph.evaluate();
//! assert_eq!(graph.get(offset), Some(-25.0));
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod mapper;
pub mod value;

pub use error::{GraphError, Result};
pub use events::{EventHub, HandlerId, InputEvent, SharedEventHub, Viewport};
pub use geometry::{Color, Point, Rect, Size, Vec2};
pub use mapper::RangeMapper;
pub use value::{NodeId, ValueGraph};
