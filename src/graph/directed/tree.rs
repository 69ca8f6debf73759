use crate::algorithm::Reachability;
use crate::graph::*;
use std::hash::Hash;

/// The tree variant: one root, and every other vertex owns exactly one
/// incoming edge.
///
/// The root is established by the first insertion, either an isolated
/// [add](GrowableGraph::add) or the source of the first edge.
/// From then on vertices may only arrive attached: further isolated
/// `add`s are rejected, and an edge is rejected when it would hand its
/// sink a second parent, close a cycle, or touch neither stored vertex
/// (which would leave a second parentless root behind).
/// Rejections leave the tree untouched; callers probe structural
/// validity through the returned boolean.
#[derive(Clone)]
pub struct Tree<V, W = ()>
where
    V: Eq + Hash + Clone,
{
    edges: Vec<Edge<V, W>>,
}

impl<V, W> Tree<V, W>
where
    V: Eq + Hash + Clone,
{
    fn has_parent(&self, vertex: &Vertex<V>) -> bool {
        self.edges.iter().any(|e| e.sink() == Some(vertex))
    }

    /// True iff `vertex` occupies any endpoint slot of a stored edge.
    fn contains(&self, vertex: &Vertex<V>) -> bool {
        self.edges
            .iter()
            .any(|e| e.source() == Some(vertex) || e.sink() == Some(vertex))
    }

    fn rejects_edge(&self, source: &Vertex<V>, sink: &Vertex<V>) -> bool {
        if self.has_parent(sink) || self.is_reachable(sink, source) {
            return true;
        }
        // Every edge after the first must attach to the stored
        // structure, through an already-stored source or by hanging the
        // current parentless root under a new one; anything else would
        // leave two roots without a predecessor.
        // The sink having a parent was excluded above, so a stored sink
        // here is that root.
        !self.edges.is_empty() && !self.contains(source) && !self.contains(sink)
    }

    /// True iff `vertex` is the source of some complete edge.
    fn has_children(&self, vertex: &Vertex<V>) -> bool {
        self.edges
            .iter()
            .any(|e| e.is_complete() && e.source() == Some(vertex))
    }
}

impl<V, W> QueryableGraph for Tree<V, W>
where
    V: Eq + Hash + Clone,
{
    type Value = V;
    type Weight = W;

    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_> {
        Box::new(self.edges.iter())
    }
}

impl<V, W> GrowableGraph for Tree<V, W>
where
    V: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { edges: vec![] }
    }

    /// Establishes the root while the tree is empty; rejected afterwards,
    /// since a second isolated vertex would be disconnected.
    fn add(&mut self, vertex: &Vertex<V>) -> bool {
        if !self.edges.is_empty() {
            return false;
        }
        self.edges.push(Edge::placeholder(vertex.clone()));
        true
    }

    fn add_edge(&mut self, source: &Vertex<V>, sink: &Vertex<V>) -> bool {
        if self.rejects_edge(source, sink) {
            return false;
        }
        self.edges.push(Edge::between(source.clone(), sink.clone()));
        true
    }

    fn add_weighted_edge(&mut self, source: &Vertex<V>, sink: &Vertex<V>, weight: W) -> bool {
        if self.rejects_edge(source, sink) {
            return false;
        }
        self.edges
            .push(Edge::weighted(source.clone(), sink.clone(), weight));
        true
    }
}

impl<V, W> VertexShrinkableGraph for Tree<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Leaf-only removal.
    ///
    /// Removing an interior vertex would orphan its subtree, so a vertex
    /// with children is left alone and the call is a no-op.
    /// For a leaf, the edge from its parent disappears, and so does its
    /// placeholder when it is a freestanding root.
    fn remove(&mut self, vertex: &Vertex<V>) {
        if self.has_children(vertex) {
            return;
        }
        self.edges.retain(|e| {
            e.sink() != Some(vertex) && !(e.is_placeholder() && e.source() == Some(vertex))
        });
    }
}

impl<V, W> Default for Tree<V, W>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> std::fmt::Debug for Tree<V, W>
where
    V: Eq + Hash + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
