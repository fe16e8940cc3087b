//! The composer boundary
//!
//! Rendering is an external collaborator: once per element per tick the
//! scene calls [`SceneComposer::apply_properties`] with fully resolved
//! values. Implementations must tolerate being called every frame even when
//! nothing changed (idempotent no-op rendering for identical values).

use indexmap::IndexMap;

use crate::element::{ElementId, PropertySet};

/// Consumes resolved per-element property values each frame
pub trait SceneComposer {
    fn apply_properties(&mut self, element: ElementId, props: &PropertySet);
}

/// Composer test double that records every application.
///
/// Used by headless runs and integration tests in place of a real renderer.
#[derive(Default)]
pub struct RecordingComposer {
    latest: IndexMap<ElementId, PropertySet>,
    applies: usize,
}

impl RecordingComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last property set applied for an element.
    pub fn latest(&self, element: ElementId) -> Option<&PropertySet> {
        self.latest.get(&element)
    }

    /// Total `apply_properties` calls.
    pub fn applies(&self) -> usize {
        self.applies
    }

    /// Number of distinct elements seen.
    pub fn element_count(&self) -> usize {
        self.latest.len()
    }

    /// Elements in first-seen order with their latest properties.
    pub fn snapshots(&self) -> impl Iterator<Item = (&ElementId, &PropertySet)> {
        self.latest.iter()
    }
}

impl SceneComposer for RecordingComposer {
    fn apply_properties(&mut self, element: ElementId, props: &PropertySet) {
        self.applies += 1;
        self.latest.insert(element, props.clone());
    }
}
