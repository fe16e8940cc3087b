//! Verve Animation System
//!
//! Spring physics, declarative keyframe timelines, and the per-frame
//! scheduler that advances them.
//!
//! # Features
//!
//! - **Spring Physics**: substepped semi-implicit Euler springs with
//!   stiffness, damping, mass; retargeting preserves velocity
//! - **Keyframe Timelines**: data-only descriptions of a property's value
//!   over time, with delay, repeat (finite or infinite), repeat delay,
//!   easing, and explicit time tables for non-uniform spacing
//! - **Stagger**: per-index delay offsets for massed choreography
//! - **Scheduler**: slotmap registries of springs and timelines advanced by
//!   a single `tick(now)` against the shared value graph

pub mod easing;
pub mod error;
pub mod keyframe;
pub mod scheduler;
pub mod spring;
pub mod timeline;

pub use easing::{CubicBezier, Easing, Power};
pub use error::{Result, TimelineError};
pub use keyframe::{KeyValue, KeyframeTrack, PathData};
pub use scheduler::{AnimationScheduler, SpringId, TimelineId};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Repeat, StaggerDirection, StaggerSpec, Timeline, TimelinePhase, TimelineSpec};
