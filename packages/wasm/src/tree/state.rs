//! SpanningTreeState - randomized Kruskal over a (possibly mirrored) lattice.
//!
//! The state owns the node grouping and three disjoint edge sets:
//! - `available`: shuffled once at init, consumed from the back like a stack
//! - `picked`: the tree so far, in build order
//! - `discarded`: edges rejected because they would close a cycle
//!
//! Every lattice edge is in exactly one of the three sets at all times, and
//! `picked` is always a forest.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::seq::SliceRandom;
use rand::Rng;

use super::grouping::Grouping;
use crate::error::{LatticeError, Result};
use crate::grid::{Edge, EdgeSet, GridTopology, Node, Symmetry, SymmetryPlan};

/// What happened to the edge consumed by one generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    Picked(Edge),
    Discarded(Edge),
}

impl EdgeOutcome {
    pub fn edge(self) -> Edge {
        match self {
            Self::Picked(edge) | Self::Discarded(edge) => edge,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpanningTreeState {
    plan: SymmetryPlan,
    groups: Grouping,
    available: Vec<Edge>,
    picked: Vec<Edge>,
    discarded: Vec<Edge>,
}

impl SpanningTreeState {
    /// Create a freshly initialized state.
    pub fn new<R: Rng + ?Sized>(topology: GridTopology, symmetry: Symmetry, rng: &mut R) -> Self {
        let plan = SymmetryPlan::new(topology, symmetry);
        let (picked, mut available) = plan.partition_edges();
        available.shuffle(rng);
        Self {
            plan,
            groups: Grouping::from_labels(topology, plan.initial_labels()),
            available,
            picked,
            discarded: Vec::new(),
        }
    }

    /// Reset every edge set and the grouping for a new lattice.
    ///
    /// Seam nodes start collapsed and seam edges start picked; every other
    /// edge is shuffled into `available`. This is the only place randomness
    /// is consumed.
    pub fn init<R: Rng + ?Sized>(&mut self, topology: GridTopology, symmetry: Symmetry, rng: &mut R) {
        *self = Self::new(topology, symmetry, rng);
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.available.is_empty()
    }

    /// Whether picking `edge` keeps `picked` a forest.
    #[inline]
    pub fn can_pick(&self, edge: Edge) -> bool {
        !self.groups.same(edge.source(), edge.destination())
    }

    /// Consume the next available edge, picking it if it joins two groups
    /// and discarding it otherwise.
    pub fn process_next_edge(&mut self) -> Result<EdgeOutcome> {
        let edge = self.available.pop().ok_or(LatticeError::InvalidState)?;
        if self.can_pick(edge) {
            self.pick(edge);
            Ok(EdgeOutcome::Picked(edge))
        } else {
            self.discarded.push(edge);
            Ok(EdgeOutcome::Discarded(edge))
        }
    }

    /// Process edges until none are available. Returns the number of steps.
    pub fn generate_complete(&mut self) -> usize {
        let mut steps = 0;
        while self.process_next_edge().is_ok() {
            steps += 1;
        }
        steps
    }

    fn pick(&mut self, edge: Edge) {
        self.groups.merge(edge.source(), edge.destination());
        self.picked.push(edge);
    }

    // =========================================================================
    // Manual editing
    // =========================================================================

    /// Which set currently holds `edge`.
    pub fn membership(&self, edge: Edge) -> Option<EdgeSet> {
        if self.picked.contains(&edge) {
            Some(EdgeSet::Picked)
        } else if self.available.contains(&edge) {
            Some(EdgeSet::Available)
        } else if self.discarded.contains(&edge) {
            Some(EdgeSet::Discarded)
        } else {
            None
        }
    }

    /// Flip an edge in or out of the tree, then [`recompute`](Self::recompute).
    ///
    /// A picked edge goes back to `available`. An available or discarded edge
    /// is picked, unless that would close a cycle. Returns the set the edge
    /// ended up in after recomputing. On error nothing is changed.
    pub fn toggle_edge(&mut self, edge: Edge) -> Result<EdgeSet> {
        match self.membership(edge) {
            Some(EdgeSet::Picked) => {
                remove_edge(&mut self.picked, edge);
                self.available.push(edge);
            }
            Some(EdgeSet::Available) | Some(EdgeSet::Discarded) => {
                if !self.can_pick(edge) {
                    return Err(LatticeError::WouldCloseCycle(edge));
                }
                remove_edge(&mut self.available, edge);
                remove_edge(&mut self.discarded, edge);
                self.picked.push(edge);
            }
            None => return Err(LatticeError::UnknownEdge(edge)),
        }
        self.recompute();
        self.membership(edge).ok_or(LatticeError::UnknownEdge(edge))
    }

    /// Rebuild the grouping from `picked` and reclassify the other edges.
    ///
    /// Groups restart from unique row-major labels (seams are not collapsed
    /// again) and every picked edge is replayed in list order. Previously
    /// discarded edges return to `available`, then anything that would now
    /// close a cycle is discarded. Calling this twice in a row is a no-op
    /// the second time.
    pub fn recompute(&mut self) {
        let mut groups = Grouping::fresh(self.plan.topology());
        for edge in &self.picked {
            groups.merge(edge.source(), edge.destination());
        }
        self.groups = groups;

        self.available.append(&mut self.discarded);
        self.discard_edges();
    }

    /// Move every unpickable available edge to `discarded`, keeping the
    /// relative order of what stays.
    fn discard_edges(&mut self) {
        let groups = &self.groups;
        let (keep, reject): (Vec<Edge>, Vec<Edge>) = self
            .available
            .drain(..)
            .partition(|edge| !groups.same(edge.source(), edge.destination()));
        self.available = keep;
        self.discarded.extend(reject);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn topology(&self) -> GridTopology {
        self.plan.topology()
    }

    pub fn symmetry(&self) -> Symmetry {
        self.plan.symmetry()
    }

    pub fn plan(&self) -> &SymmetryPlan {
        &self.plan
    }

    pub fn groups(&self) -> &Grouping {
        &self.groups
    }

    pub fn available(&self) -> &[Edge] {
        &self.available
    }

    pub fn picked(&self) -> &[Edge] {
        &self.picked
    }

    pub fn discarded(&self) -> &[Edge] {
        &self.discarded
    }

    pub fn edges(&self, set: EdgeSet) -> &[Edge] {
        match set {
            EdgeSet::Available => &self.available,
            EdgeSet::Picked => &self.picked,
            EdgeSet::Discarded => &self.discarded,
        }
    }

    /// The picked edges as an undirected graph over every lattice node.
    ///
    /// Node indices follow row-major slot order.
    pub fn forest(&self) -> UnGraph<Node, ()> {
        let topology = self.topology();
        let mut graph = UnGraph::with_capacity(topology.node_count(), self.picked.len());
        for node in topology.nodes() {
            graph.add_node(node);
        }
        for edge in &self.picked {
            graph.add_edge(
                NodeIndex::new(topology.index(edge.source())),
                NodeIndex::new(topology.index(edge.destination())),
                (),
            );
        }
        graph
    }

    /// Number of connected components of the picked forest.
    pub fn component_count(&self) -> usize {
        connected_components(&self.forest())
    }
}

fn remove_edge(edges: &mut Vec<Edge>, edge: Edge) {
    if let Some(pos) = edges.iter().position(|&e| e == edge) {
        edges.remove(pos);
    }
}
