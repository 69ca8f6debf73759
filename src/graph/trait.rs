use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;
use std::hash::Hash;

/// Read-side capabilities over a stored edge sequence.
///
/// Everything except [iter_edges](QueryableGraph::iter_edges) has a
/// provided implementation derived from it, so a variant only has to
/// expose its edges in insertion order.
pub trait QueryableGraph {
    /// Vertex payload type. Vertices are keyed by it.
    type Value: Eq + Hash + Clone;
    /// Edge weight type.
    type Weight;

    /// Iterates over stored edges in insertion order, placeholders
    /// included.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = &Edge<Self::Value, Self::Weight>> + '_>;

    /// Number of occupied endpoint slots across all stored edges.
    ///
    /// This counts occurrences, not distinct values: a vertex stored in
    /// three edges contributes three.
    fn vertex_count(&self) -> usize {
        self.iter_edges().map(|e| e.occupied_slots()).sum()
    }

    /// Number of complete edges. Placeholders are excluded.
    fn edge_count(&self) -> usize {
        self.iter_edges().filter(|e| e.is_complete()).count()
    }

    /// True iff some stored edge runs from `source` to `sink`.
    /// Directional: adjacency is not symmetric.
    fn are_adjacent(&self, source: &Vertex<Self::Value>, sink: &Vertex<Self::Value>) -> bool {
        self.iter_edges()
            .any(|e| e.source() == Some(source) && e.sink() == Some(sink))
    }

    /// For every edge where `vertex` occupies either slot, collects the
    /// other occupied slot, in edge-storage order.
    ///
    /// The result is freshly cloned; mutating it never touches the graph.
    fn neighbors(&self, vertex: &Vertex<Self::Value>) -> Vec<Vertex<Self::Value>> {
        let mut res = vec![];
        for e in self.iter_edges() {
            if e.source() == Some(vertex) {
                if let Some(sink) = e.sink() {
                    res.push(sink.clone());
                }
            } else if e.sink() == Some(vertex) {
                if let Some(source) = e.source() {
                    res.push(source.clone());
                }
            }
        }
        res
    }

    /// The structurally topmost vertex: scanning edges in storage order,
    /// the first occupied source slot whose vertex did not appear as a
    /// sink in any earlier edge.
    ///
    /// All variants preserve insertion order, so for a tree this is the
    /// root and for the other variants the first-inserted source.
    fn top(&self) -> Option<Vertex<Self::Value>> {
        let mut seen_sinks = HashSet::with_hasher(RandomState::new());
        for e in self.iter_edges() {
            if let Some(source) = e.source() {
                if !seen_sinks.contains(source) {
                    return Some(source.clone());
                }
            }
            if let Some(sink) = e.sink() {
                seen_sinks.insert(sink);
            }
        }
        None
    }

    /// A [std::fmt::Display] adapter dumping the graph one edge per line.
    fn display(&self) -> GraphDisplay<'_, Self>
    where
        Self: Sized,
    {
        GraphDisplay::new(self)
    }
}

/// Mutating capabilities: vertex and edge insertion.
///
/// Insertions return `false` when the variant's structural invariant
/// would be violated; a rejected insertion leaves the graph untouched.
pub trait GrowableGraph: QueryableGraph {
    fn new() -> Self;

    /// Inserts a clone of `vertex` as an isolated vertex, stored as a
    /// placeholder edge.
    fn add(&mut self, vertex: &Vertex<Self::Value>) -> bool;

    /// Inserts an edge from a clone of `source` to a clone of `sink`.
    fn add_edge(&mut self, source: &Vertex<Self::Value>, sink: &Vertex<Self::Value>) -> bool;

    /// Like [add_edge](GrowableGraph::add_edge), carrying a weight.
    fn add_weighted_edge(
        &mut self,
        source: &Vertex<Self::Value>,
        sink: &Vertex<Self::Value>,
        weight: Self::Weight,
    ) -> bool;
}

/// Vertex removal capability.
pub trait VertexShrinkableGraph: QueryableGraph {
    /// Removes `vertex` from the graph; each variant defines which of
    /// its stored edges that drops.
    fn remove(&mut self, vertex: &Vertex<Self::Value>);
}

/// Payload access shared by vertices and edges.
pub trait Valued {
    type Value;

    /// The stored payload. `None` only for unweighted edges; vertices
    /// always carry one.
    fn value(&self) -> Option<&Self::Value>;

    /// Replaces the payload wholesale.
    fn set_value(&mut self, value: Self::Value);
}
