//! Verve Scene Layer
//!
//! Declarative animated scenes over the Verve engine. A [`Scene`] owns the
//! value graph, the animation scheduler, and the input trackers for one
//! mounted composition. Elements are declared as data — a base property
//! set, timeline bindings, and graph-node bindings — and the per-frame
//! [`Scene::tick`] assembles each element's resolved [`PropertySet`] and
//! hands it to the [`SceneComposer`].
//!
//! Rendering stays outside: a composer receives property values
//! (translations, rotations, scales, colors, opacity, path data) and draws
//! them however it likes. The [`RecordingComposer`] test double captures
//! snapshots for assertions and headless runs.
//!
//! The stock [`hero`] module declares a complete ready-made composition:
//! three characters, speech bubbles, stars, hearts, confetti, and props,
//! with scroll parallax and pointer tilt.

pub mod composer;
pub mod element;
pub mod error;
pub mod hero;
pub mod scene;

pub use composer::{RecordingComposer, SceneComposer};
pub use element::{ElementDecl, ElementId, Property, PropertySet, TimelineBinding};
pub use error::SceneError;
pub use scene::Scene;
