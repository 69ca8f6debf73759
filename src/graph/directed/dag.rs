use crate::algorithm::Reachability;
use crate::graph::*;
use std::hash::Hash;

/// The acyclic variant: the stored edge relation stays free of directed
/// cycles across every mutation.
///
/// The invariant is enforced at the insertion point.
/// [add_edge](GrowableGraph::add_edge) searches for a directed path from
/// the candidate sink back to the candidate source and rejects on a hit,
/// so reads never have to re-validate anything.
/// Parallel edges are still permitted; they cannot close a cycle.
#[derive(Clone)]
pub struct DirectedAcyclicGraph<V, W = ()>
where
    V: Eq + Hash + Clone,
{
    edges: Vec<Edge<V, W>>,
}

impl<V, W> DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    /// The insertion gate: `source -> sink` closes a cycle iff `source`
    /// is already reachable from `sink`.
    /// Self-loops are the degenerate case, rejected because every vertex
    /// reaches itself.
    fn closes_cycle(&self, source: &Vertex<V>, sink: &Vertex<V>) -> bool {
        self.is_reachable(sink, source)
    }
}

impl<V, W> QueryableGraph for DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    type Value = V;
    type Weight = W;

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_> {
        Box::new(self.edges.iter())
    }
}

impl<V, W> GrowableGraph for DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { edges: vec![] }
    }

    fn add(&mut self, vertex: &Vertex<V>) -> bool {
        self.edges.push(Edge::placeholder(vertex.clone()));
        true
    }

    fn add_edge(&mut self, source: &Vertex<V>, sink: &Vertex<V>) -> bool {
        if self.closes_cycle(source, sink) {
            return false;
        }
        self.edges.push(Edge::between(source.clone(), sink.clone()));
        true
    }

    fn add_weighted_edge(&mut self, source: &Vertex<V>, sink: &Vertex<V>, weight: W) -> bool {
        if self.closes_cycle(source, sink) {
            return false;
        }
        self.edges
            .push(Edge::weighted(source.clone(), sink.clone(), weight));
        true
    }
}

impl<V, W> VertexShrinkableGraph for DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Source-keyed, like the unconstrained variant.
    /// Removal only ever deletes edges, which cannot introduce a cycle.
    fn remove(&mut self, vertex: &Vertex<V>) {
        self.edges.retain(|e| e.source() != Some(vertex));
    }
}

impl<V, W> Default for DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> std::fmt::Debug for DirectedAcyclicGraph<V, W>
where
    V: Eq + Hash + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
