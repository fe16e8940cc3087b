//! Animation scheduler
//!
//! Owns the running springs and timelines and advances them once per frame.
//! Springs are bound to the value graph: each one chases a target node and
//! publishes its smoothed position into an output source node, so range
//! mappers can consume smoothed values like any other input.
//!
//! Tick order inside one frame: derived targets are refreshed first, then
//! springs integrate, then timelines sample, then the graph is re-evaluated
//! so every mapper downstream of a spring output sees this frame's value.
//! One tick therefore yields a single consistent snapshot with no
//! mid-frame tearing.

use slotmap::{new_key_type, SlotMap};
use tracing::warn;

use verve_core::error::{GraphError, Result as GraphResult};
use verve_core::value::{NodeId, ValueGraph};

use crate::spring::{Spring, SpringConfig};
use crate::timeline::Timeline;

new_key_type! {
    pub struct SpringId;
    pub struct TimelineId;
}

/// A spring chasing one graph node and publishing into another
struct SpringBinding {
    spring: Spring,
    target: NodeId,
    output: NodeId,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, SpringBinding>,
    timelines: SlotMap<TimelineId, Timeline>,
    last_tick: Option<f64>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            timelines: SlotMap::with_key(),
            last_tick: None,
        }
    }

    /// Bind a spring to `target`, creating and returning its output node
    /// alongside the spring id. The output starts at the target's current
    /// value, at rest.
    pub fn add_spring(
        &mut self,
        graph: &mut ValueGraph,
        target: NodeId,
        config: SpringConfig,
    ) -> GraphResult<(SpringId, NodeId)> {
        let initial = graph.get(target).ok_or(GraphError::UnknownNode)?;
        let output = graph.create_source(initial);
        let id = self.springs.insert(SpringBinding {
            spring: Spring::new(config, initial),
            target,
            output,
        });
        Ok((id, output))
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id).map(|b| &b.spring)
    }

    pub fn with_spring_mut<R>(&mut self, id: SpringId, f: impl FnOnce(&mut Spring) -> R) -> Option<R> {
        self.springs.get_mut(id).map(|b| f(&mut b.spring))
    }

    /// Output node a spring publishes into.
    pub fn spring_output(&self, id: SpringId) -> Option<NodeId> {
        self.springs.get(id).map(|b| b.output)
    }

    /// Drop a spring binding; its output node keeps its last value.
    pub fn remove_spring(&mut self, id: SpringId) -> bool {
        self.springs.remove(id).is_some()
    }

    /// Register a timeline. It anchors its clock on the first tick after
    /// registration, so delays are relative to that frame.
    pub fn add_timeline(&mut self, timeline: Timeline) -> TimelineId {
        self.timelines.insert(timeline)
    }

    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    pub fn cancel_timeline(&mut self, id: TimelineId) {
        if let Some(tl) = self.timelines.get_mut(id) {
            tl.cancel();
        }
    }

    pub fn remove_timeline(&mut self, id: TimelineId) -> bool {
        self.timelines.remove(id).is_some()
    }

    /// Cancel and drop everything registered.
    pub fn clear(&mut self) {
        for (_, tl) in self.timelines.iter_mut() {
            tl.cancel();
        }
        self.timelines.clear();
        self.springs.clear();
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    /// Whether anything would still move on the next tick.
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, b)| !b.spring.is_settled())
            || self.timelines.iter().any(|(_, tl)| tl.is_active())
    }

    /// Advance all animations to `now` against the shared graph.
    pub fn tick(&mut self, now: f64, graph: &mut ValueGraph) {
        let dt = match self.last_tick {
            Some(last) => ((now - last).max(0.0)) as f32,
            None => 0.0,
        };
        self.last_tick = Some(now);

        // Derived spring targets (mapper chains over raw input) must be
        // fresh before springs read them.
        graph.evaluate();

        for (_, binding) in self.springs.iter_mut() {
            let Some(target) = graph.get(binding.target) else {
                warn!("spring target node missing; skipping");
                continue;
            };
            binding.spring.set_target(target);
            binding.spring.step(dt);
            if graph
                .set_if_changed(binding.output, binding.spring.value())
                .is_err()
            {
                warn!("spring output node missing; skipping");
            }
        }

        for (_, timeline) in self.timelines.iter_mut() {
            if !timeline.is_started() {
                timeline.start(now);
            }
            timeline.tick(now);
        }

        // Mappers downstream of spring outputs see this frame's values.
        graph.evaluate();
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
