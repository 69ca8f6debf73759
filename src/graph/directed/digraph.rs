use crate::graph::*;
use std::hash::Hash;

/// The unconstrained variant: no structural invariant beyond edge-list
/// integrity, so every mutation succeeds.
///
/// Parallel edges and self-loops are permitted; nothing is deduplicated.
#[derive(Clone)]
pub struct DirectedGraph<V, W = ()>
where
    V: Eq + Hash + Clone,
{
    edges: Vec<Edge<V, W>>,
}

impl<V, W> QueryableGraph for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    type Value = V;
    type Weight = W;

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_> {
        Box::new(self.edges.iter())
    }
}

impl<V, W> GrowableGraph for DirectedGraph<V, W>
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
        self.edges.push(Edge::between(source.clone(), sink.clone()));
        true
    }

    fn add_weighted_edge(&mut self, source: &Vertex<V>, sink: &Vertex<V>, weight: W) -> bool {
        self.edges
            .push(Edge::weighted(source.clone(), sink.clone(), weight));
        true
    }
}

impl<V, W> VertexShrinkableGraph for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Source-keyed removal: drops every edge whose source equals
    /// `vertex`, placeholders included.
    /// Occurrences of `vertex` in sink slots stay behind.
    fn remove(&mut self, vertex: &Vertex<V>) {
        self.edges.retain(|e| e.source() != Some(vertex));
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> std::fmt::Debug for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
