//! Scene orchestration
//!
//! A [`Scene`] wires the whole engine together for one mounted composition:
//!
//! - input trackers subscribe to the shared event hub at mount and stage
//!   raw pointer/scroll values
//! - range mappers and springs derive scene-relevant quantities inside the
//!   value graph
//! - declared elements bind properties to graph nodes and timelines
//!
//! `tick(now)` runs the frame in a fixed order: flush staged input, advance
//! springs and timelines against the graph, then assemble and commit one
//! property set per element. Everything the composer sees in a tick comes
//! from the same frame snapshot.
//!
//! Teardown is explicit and exactly-once: `unmount` (also run on drop)
//! cancels all timelines, drops all springs, and unsubscribes every event
//! handler, so nothing keeps running for a scene that is gone.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::{debug, warn};

use verve_animation::keyframe::KeyValue;
use verve_animation::scheduler::{AnimationScheduler, TimelineId};
use verve_animation::spring::SpringConfig;
use verve_animation::timeline::Timeline;
use verve_core::error::GraphError;
use verve_core::events::{HandlerId, InputEvent, SharedEventHub};
use verve_core::mapper::RangeMapper;
use verve_core::value::{NodeId, ValueGraph};
use verve_input::{OffsetWindow, PointerTracker, ScrollTracker};

use crate::composer::SceneComposer;
use crate::element::{ElementDecl, ElementId, Property, PropertySet};
use crate::error::{Result, SceneError};

struct BoundTimeline {
    property: Property,
    timeline: TimelineId,
}

struct ElementState {
    name: String,
    base: PropertySet,
    node_bindings: SmallVec<[(Property, NodeId); 4]>,
    timelines: SmallVec<[BoundTimeline; 8]>,
    /// Last-known-good properties, substituted while evaluation fails
    committed: PropertySet,
    failed: bool,
}

/// A mounted animated composition
pub struct Scene {
    graph: ValueGraph,
    scheduler: AnimationScheduler,
    hub: SharedEventHub,
    subscriptions: Vec<HandlerId>,
    pointer: Rc<RefCell<PointerTracker>>,
    scroll: Rc<RefCell<ScrollTracker>>,
    elements: SlotMap<ElementId, ElementState>,
    /// Elements in declaration order; assembly and composer calls follow it
    order: Vec<ElementId>,
    mounted: bool,
}

impl Scene {
    /// Mount a scene: create its value graph and trackers and subscribe the
    /// trackers to the hub. The scroll tracker publishes progress through
    /// `window`.
    pub fn mount(hub: &SharedEventHub, window: OffsetWindow) -> Self {
        let mut graph = ValueGraph::new();
        let pointer = Rc::new(RefCell::new(PointerTracker::new(&mut graph)));
        let scroll = Rc::new(RefCell::new(ScrollTracker::new(&mut graph, window)));

        let mut subscriptions = Vec::with_capacity(2);
        {
            let pointer = Rc::clone(&pointer);
            subscriptions.push(hub.borrow_mut().subscribe(move |event| {
                if let InputEvent::PointerMove {
                    position,
                    container,
                } = event
                {
                    pointer.borrow_mut().on_pointer_move(*position, *container);
                }
            }));
        }
        {
            let scroll = Rc::clone(&scroll);
            subscriptions.push(hub.borrow_mut().subscribe(move |event| {
                if let InputEvent::Scroll { viewport, target }
                | InputEvent::Resize { viewport, target } = event
                {
                    scroll.borrow_mut().on_scroll(*viewport, *target);
                }
            }));
        }

        debug!("scene mounted with {} listeners", subscriptions.len());
        Self {
            graph,
            scheduler: AnimationScheduler::new(),
            hub: Rc::clone(hub),
            subscriptions,
            pointer,
            scroll,
            elements: SlotMap::with_key(),
            order: Vec::new(),
            mounted: true,
        }
    }

    // ========================================================================
    // Graph wiring
    // ========================================================================

    /// Normalized scroll progress node.
    pub fn scroll_node(&self) -> NodeId {
        self.scroll.borrow().node()
    }

    /// Pointer offset nodes, relative to the scene container center.
    pub fn pointer_nodes(&self) -> (NodeId, NodeId) {
        let p = self.pointer.borrow();
        (p.dx_node(), p.dy_node())
    }

    /// Derive a node by mapping `input` through `mapper`.
    pub fn map(&mut self, input: NodeId, mapper: RangeMapper) -> Result<NodeId> {
        Ok(self.graph.create_mapped(input, mapper)?)
    }

    /// Derive a node that chases `input` with spring inertia.
    pub fn smooth(&mut self, input: NodeId, config: SpringConfig) -> Result<NodeId> {
        let (_, output) = self.scheduler.add_spring(&mut self.graph, input, config)?;
        Ok(output)
    }

    pub fn graph(&self) -> &ValueGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut ValueGraph {
        &mut self.graph
    }

    // ========================================================================
    // Elements
    // ========================================================================

    /// Declare an element. All timeline specs are validated up front;
    /// a configuration error schedules nothing.
    pub fn add_element(&mut self, decl: ElementDecl) -> Result<ElementId> {
        for binding in &decl.timelines {
            binding.spec.validate()?;
        }

        let mut timelines = SmallVec::new();
        for binding in decl.timelines {
            let timeline = Timeline::new(binding.spec)?;
            timelines.push(BoundTimeline {
                property: binding.property,
                timeline: self.scheduler.add_timeline(timeline),
            });
        }

        let committed = decl.base.clone();
        let id = self.elements.insert(ElementState {
            name: decl.name,
            base: decl.base,
            node_bindings: SmallVec::new(),
            timelines,
            committed,
            failed: false,
        });
        self.order.push(id);
        Ok(id)
    }

    /// Bind a graph node to an element property; the node's value is read
    /// every tick after mappers and springs have run.
    pub fn bind(&mut self, element: ElementId, property: Property, node: NodeId) -> Result<()> {
        if self.graph.get(node).is_none() {
            return Err(GraphError::UnknownNode.into());
        }
        let state = self
            .elements
            .get_mut(element)
            .ok_or(SceneError::UnknownElement)?;
        state.node_bindings.push((property, node));
        Ok(())
    }

    pub fn element_by_name(&self, name: &str) -> Option<ElementId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.elements.get(*id).is_some_and(|e| e.name == name))
    }

    pub fn element_count(&self) -> usize {
        self.order.len()
    }

    /// Last committed property set for an element.
    pub fn committed(&self, element: ElementId) -> Option<&PropertySet> {
        self.elements.get(element).map(|e| &e.committed)
    }

    /// Whether the element's last evaluation failed and it is frozen at its
    /// last-known-good appearance.
    pub fn is_frozen(&self, element: ElementId) -> bool {
        self.elements.get(element).is_some_and(|e| e.failed)
    }

    // ========================================================================
    // Frame driving
    // ========================================================================

    /// Advance the whole scene to `now` and hand every element's resolved
    /// properties to the composer.
    ///
    /// A failure while evaluating one element is contained: that element
    /// keeps its last committed values, the failure is logged, and the rest
    /// of the scene continues.
    pub fn tick(&mut self, now: f64, composer: &mut dyn SceneComposer) {
        if !self.mounted {
            return;
        }

        // Coalesced input lands in the graph exactly once per frame.
        self.pointer.borrow_mut().flush(&mut self.graph);
        self.scroll.borrow_mut().flush(&mut self.graph);

        self.scheduler.tick(now, &mut self.graph);

        for &id in &self.order {
            let Some(state) = self.elements.get_mut(id) else {
                continue;
            };
            match assemble(state, &self.graph, &self.scheduler) {
                Ok(props) => {
                    state.committed = props;
                    state.failed = false;
                }
                Err(source) => {
                    if !state.failed {
                        let err = SceneError::ElementEvaluation {
                            name: state.name.clone(),
                            source: Box::new(source),
                        };
                        warn!("{err}; keeping last committed values");
                        state.failed = true;
                    }
                }
            }
            composer.apply_properties(id, &state.committed);
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn active_timelines(&self) -> usize {
        self.scheduler.timeline_count()
    }

    pub fn active_springs(&self) -> usize {
        self.scheduler.spring_count()
    }

    /// Tear the scene down: cancel every timeline, drop every spring, and
    /// unsubscribe every event handler. Safe to call more than once; also
    /// runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted && self.subscriptions.is_empty() {
            return;
        }
        self.mounted = false;
        self.scheduler.clear();
        match self.hub.try_borrow_mut() {
            Ok(mut hub) => {
                for id in self.subscriptions.drain(..) {
                    hub.unsubscribe(id);
                }
            }
            Err(_) => {
                warn!("event hub borrowed during teardown; listeners not released");
            }
        }
        debug!("scene unmounted");
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Merge base values, node bindings, then timeline outputs (in declaration
/// order, later writes winning) into one resolved property set.
fn assemble(
    state: &ElementState,
    graph: &ValueGraph,
    scheduler: &AnimationScheduler,
) -> Result<PropertySet> {
    let mut props = state.base.clone();
    for (property, node) in &state.node_bindings {
        let value = graph.get(*node).ok_or(GraphError::UnknownNode)?;
        props.apply(*property, &KeyValue::Scalar(value))?;
    }
    for bound in &state.timelines {
        let Some(timeline) = scheduler.timeline(bound.timeline) else {
            continue;
        };
        props.apply(bound.property, timeline.value())?;
    }
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_core::events::shared_hub;

    #[test]
    fn mount_subscribes_and_unmount_releases() {
        let hub = shared_hub();
        let mut scene = Scene::mount(&hub, OffsetWindow::default());
        assert_eq!(hub.borrow().handler_count(), 2);
        assert_eq!(scene.listener_count(), 2);

        scene.unmount();
        assert_eq!(hub.borrow().handler_count(), 0);
        assert_eq!(scene.listener_count(), 0);
        assert!(!scene.is_mounted());

        // Idempotent.
        scene.unmount();
        assert_eq!(hub.borrow().handler_count(), 0);
    }

    #[test]
    fn drop_releases_listeners() {
        let hub = shared_hub();
        {
            let _scene = Scene::mount(&hub, OffsetWindow::default());
            assert_eq!(hub.borrow().handler_count(), 2);
        }
        assert_eq!(hub.borrow().handler_count(), 0);
    }

    #[test]
    fn bind_rejects_unknown_targets() {
        let hub = shared_hub();
        let mut scene = Scene::mount(&hub, OffsetWindow::default());
        let element = scene.add_element(ElementDecl::new("probe")).unwrap();
        let (dx, _) = scene.pointer_nodes();

        assert!(matches!(
            scene.bind(element, Property::TranslateX, NodeId::default()),
            Err(SceneError::Graph(GraphError::UnknownNode))
        ));
        assert!(matches!(
            scene.bind(ElementId::default(), Property::TranslateX, dx),
            Err(SceneError::UnknownElement)
        ));
        scene.bind(element, Property::TranslateX, dx).unwrap();
    }

    #[test]
    fn invalid_timeline_spec_schedules_nothing() {
        use verve_animation::keyframe::KeyframeTrack;
        use verve_animation::timeline::TimelineSpec;

        let hub = shared_hub();
        let mut scene = Scene::mount(&hub, OffsetWindow::default());
        let decl = ElementDecl::new("broken")
            .animate(
                Property::Opacity,
                TimelineSpec::new(KeyframeTrack::scalars([0.0, 1.0]).unwrap(), 1.0),
            )
            .animate(
                Property::Scale,
                TimelineSpec::new(KeyframeTrack::scalars([0.0, 1.0]).unwrap(), -2.0),
            );
        assert!(scene.add_element(decl).is_err());
        assert_eq!(scene.active_timelines(), 0);
        assert_eq!(scene.element_count(), 0);
    }
}
