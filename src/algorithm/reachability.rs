use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Directed path existence over the stored edge relation.
///
/// A breadth-first search over the edge list, one full scan per frontier
/// vertex.
/// No adjacency index is kept, so this is O(V * E) in the worst case,
/// which is the right trade for the small graphs these containers hold:
/// the invariant gates in
/// [DirectedAcyclicGraph](crate::graph::DirectedAcyclicGraph) and
/// [Tree](crate::graph::Tree) run it once per insertion and every read
/// operation stays invariant-free.
pub trait Reachability
where
    Self: QueryableGraph + Sized,
{
    /// True iff a directed path leads from `from` to `to`.
    ///
    /// Every vertex reaches itself: `is_reachable(v, v)` is true even if
    /// `v` is stored nowhere.
    fn is_reachable(&self, from: &Vertex<Self::Value>, to: &Vertex<Self::Value>) -> bool {
        if from == to {
            return true;
        }
        let mut visited: HashSet<&Vertex<Self::Value>, RandomState> =
            HashSet::with_hasher(RandomState::new());
        visited.insert(from);
        let mut frontier = VecDeque::new();
        frontier.push_back(from);
        while let Some(cur) = frontier.pop_front() {
            for e in self.iter_edges() {
                if e.source() != Some(cur) {
                    continue;
                }
                if let Some(sink) = e.sink() {
                    if sink == to {
                        return true;
                    }
                    if visited.insert(sink) {
                        frontier.push_back(sink);
                    }
                }
            }
        }
        false
    }
}

impl<G: QueryableGraph> Reachability for G {}
