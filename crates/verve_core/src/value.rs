//! Reactive value graph
//!
//! A [`ValueGraph`] holds named observable scalars. Source nodes are written
//! by exactly one producer (a tracker, a spring, user code); mapped nodes
//! derive their value from a single input node through a [`RangeMapper`] and
//! are recomputed by [`ValueGraph::evaluate`] in dependency order.
//!
//! Every mutation bumps the node's version; consumers detect staleness by
//! comparing the last version they saw.

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};

use crate::error::{GraphError, Result};
use crate::mapper::RangeMapper;

new_key_type! {
    /// Identifier of a node in the value graph
    pub struct NodeId;
}

#[derive(Clone, Debug)]
enum NodeKind {
    /// Externally written scalar
    Source,
    /// Derived scalar: `mapper.map(input)`
    Mapped {
        input: NodeId,
        mapper: RangeMapper,
        /// Input version consumed by the last evaluation
        seen: u64,
    },
}

#[derive(Clone, Debug)]
struct Node {
    value: f32,
    version: u64,
    seq: u64,
    kind: NodeKind,
}

/// The reactive graph of animatable values
pub struct ValueGraph {
    nodes: SlotMap<NodeId, Node>,
    /// Mapped nodes sorted by dependency depth; rebuilt on rebind
    order: Vec<NodeId>,
    next_seq: u64,
}

impl ValueGraph {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            next_seq: 0,
        }
    }

    /// Create a source node holding `initial`.
    pub fn create_source(&mut self, initial: f32) -> NodeId {
        let seq = self.bump_seq();
        self.nodes.insert(Node {
            value: initial,
            version: 0,
            seq,
            kind: NodeKind::Source,
        })
    }

    /// Create a derived node mapping `input` through `mapper`.
    ///
    /// The initial value is computed immediately from the input's current
    /// value. New nodes can only reference existing ones, so creation order
    /// is already a valid evaluation order.
    pub fn create_mapped(&mut self, input: NodeId, mapper: RangeMapper) -> Result<NodeId> {
        let source = self.nodes.get(input).ok_or(GraphError::UnknownNode)?;
        let value = mapper.map(source.value);
        let seen = source.version;
        let seq = self.bump_seq();
        let id = self.nodes.insert(Node {
            value,
            version: 0,
            seq,
            kind: NodeKind::Mapped {
                input,
                mapper,
                seen,
            },
        });
        self.order.push(id);
        Ok(id)
    }

    /// Point an existing mapped node at a different input.
    ///
    /// Fails with [`GraphError::CyclicDependency`] if the new input
    /// (transitively) depends on the node itself; the graph is left
    /// unchanged in that case. This is the one operation that can introduce
    /// a cycle, so the check happens here, at configuration time, and ticks
    /// stay check-free.
    pub fn rebind_input(&mut self, node: NodeId, new_input: NodeId) -> Result<()> {
        if !self.nodes.contains_key(new_input) {
            return Err(GraphError::UnknownNode);
        }
        if node == new_input || self.depends_on(new_input, node) {
            return Err(GraphError::CyclicDependency);
        }
        let entry = self.nodes.get_mut(node).ok_or(GraphError::UnknownNode)?;
        match &mut entry.kind {
            NodeKind::Mapped { input, seen, .. } => {
                *input = new_input;
                // Force recomputation on the next evaluate pass.
                *seen = u64::MAX;
            }
            NodeKind::Source => return Err(GraphError::NotWritable),
        }
        self.rebuild_order();
        tracing::trace!("mapped node rebound; evaluation order rebuilt");
        Ok(())
    }

    /// Write a source node, bumping its version.
    pub fn set(&mut self, node: NodeId, value: f32) -> Result<()> {
        let entry = self.nodes.get_mut(node).ok_or(GraphError::UnknownNode)?;
        match entry.kind {
            NodeKind::Source => {
                entry.value = value;
                entry.version += 1;
                Ok(())
            }
            NodeKind::Mapped { .. } => Err(GraphError::NotWritable),
        }
    }

    /// Write a source node only if the value actually changed.
    ///
    /// Returns whether a write happened. Producers that re-publish the same
    /// value every frame use this to avoid version churn downstream.
    pub fn set_if_changed(&mut self, node: NodeId, value: f32) -> Result<bool> {
        let current = self.get(node).ok_or(GraphError::UnknownNode)?;
        if current == value {
            return Ok(false);
        }
        self.set(node, value)?;
        Ok(true)
    }

    /// Most recently computed value of a node.
    pub fn get(&self, node: NodeId) -> Option<f32> {
        self.nodes.get(node).map(|n| n.value)
    }

    /// Current version counter of a node.
    pub fn version(&self, node: NodeId) -> Option<u64> {
        self.nodes.get(node).map(|n| n.version)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Recompute every mapped node whose input changed since the last pass,
    /// in dependency order, so chained mappers observe fresh upstream values
    /// within a single call.
    pub fn evaluate(&mut self) {
        for idx in 0..self.order.len() {
            let id = self.order[idx];
            let (input, seen) = match self.nodes.get(id) {
                Some(Node {
                    kind: NodeKind::Mapped { input, seen, .. },
                    ..
                }) => (*input, *seen),
                _ => continue,
            };
            let Some(source) = self.nodes.get(input) else {
                continue;
            };
            if source.version == seen {
                continue;
            }
            let (in_value, in_version) = (source.value, source.version);
            let Some(entry) = self.nodes.get_mut(id) else {
                continue;
            };
            if let NodeKind::Mapped { mapper, seen, .. } = &mut entry.kind {
                let next = mapper.map(in_value);
                *seen = in_version;
                if next != entry.value {
                    entry.value = next;
                    entry.version += 1;
                }
            }
        }
    }

    /// Whether `node` transitively reads from `target`.
    fn depends_on(&self, node: NodeId, target: NodeId) -> bool {
        let mut visited = FxHashSet::default();
        let mut current = node;
        loop {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                return false;
            }
            match self.nodes.get(current) {
                Some(Node {
                    kind: NodeKind::Mapped { input, .. },
                    ..
                }) => current = *input,
                _ => return false,
            }
        }
    }

    /// Each mapped node has exactly one input, so dependency depth gives a
    /// topological order directly; ties keep creation order for determinism.
    fn rebuild_order(&mut self) {
        let mut entries: Vec<(u32, u64, NodeId)> = self
            .order
            .iter()
            .filter(|id| self.nodes.contains_key(**id))
            .map(|&id| (self.depth_of(id), self.nodes[id].seq, id))
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        self.order = entries.into_iter().map(|(_, _, id)| id).collect();
    }

    fn depth_of(&self, node: NodeId) -> u32 {
        let mut depth = 0;
        let mut current = node;
        let mut guard = self.nodes.len() + 1;
        while let Some(Node {
            kind: NodeKind::Mapped { input, .. },
            ..
        }) = self.nodes.get(current)
        {
            depth += 1;
            current = *input;
            guard -= 1;
            if guard == 0 {
                break;
            }
        }
        depth
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Default for ValueGraph {
    fn default() -> Self {
        Self::new()
    }
}
