//! The generic operation layer: free functions over the capability
//! traits.
//!
//! Nothing here stores state or knows which variant it is handed.
//! Every function dispatches to the graph's own implementation and
//! passes accept/reject results straight back, so
//! [DirectedGraph](crate::graph::DirectedGraph),
//! [DirectedAcyclicGraph](crate::graph::DirectedAcyclicGraph) and
//! [Tree](crate::graph::Tree) are interchangeable at every call site.

use crate::graph::*;

/// Inserts an isolated vertex. `false` iff the variant rejected it.
pub fn add<G: GrowableGraph>(graph: &mut G, vertex: &Vertex<G::Value>) -> bool {
    graph.add(vertex)
}

/// Inserts an edge. `false` iff the variant's invariant rejected it.
pub fn add_edge<G: GrowableGraph>(
    graph: &mut G,
    source: &Vertex<G::Value>,
    sink: &Vertex<G::Value>,
) -> bool {
    graph.add_edge(source, sink)
}

/// Inserts a weighted edge.
pub fn add_weighted_edge<G: GrowableGraph>(
    graph: &mut G,
    source: &Vertex<G::Value>,
    sink: &Vertex<G::Value>,
    weight: G::Weight,
) -> bool {
    graph.add_weighted_edge(source, sink, weight)
}

/// Removes a vertex under the variant's own removal rule.
pub fn remove<G: VertexShrinkableGraph>(graph: &mut G, vertex: &Vertex<G::Value>) {
    graph.remove(vertex)
}

/// True iff an edge runs from `source` to `sink`. Directional.
pub fn adjacent<G: QueryableGraph>(
    graph: &G,
    source: &Vertex<G::Value>,
    sink: &Vertex<G::Value>,
) -> bool {
    graph.are_adjacent(source, sink)
}

/// Clones of every vertex sharing an edge with `vertex`, in storage
/// order.
pub fn neighbors<G: QueryableGraph>(graph: &G, vertex: &Vertex<G::Value>) -> Vec<Vertex<G::Value>> {
    graph.neighbors(vertex)
}

/// Occupied endpoint slots across stored edges (occurrences, not
/// distinct values).
pub fn count_vertices<G: QueryableGraph>(graph: &G) -> usize {
    graph.vertex_count()
}

/// Complete stored edges.
pub fn count_edges<G: QueryableGraph>(graph: &G) -> usize {
    graph.edge_count()
}

/// The structurally topmost vertex, if any.
pub fn top<G: QueryableGraph>(graph: &G) -> Option<Vertex<G::Value>> {
    graph.top()
}

/// Reads the payload of a vertex or the weight of an edge.
pub fn value<T: Valued>(x: &T) -> Option<&T::Value> {
    x.value()
}

/// Replaces the payload of a vertex or the weight of an edge.
pub fn set_value<T: Valued>(x: &mut T, value: T::Value) {
    x.set_value(value)
}

/// The graph as a string, one stored edge per line, absent slots as
/// `NULL`.
pub fn to_string<G>(graph: &G) -> String
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    graph.display().to_string()
}

/// Dumps the graph to stdout in the [to_string] format.
pub fn print<G>(graph: &G)
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    println!("{}", graph.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::*;

    type Payload = (&'static str, i32);

    fn verts() -> (Vertex<Payload>, Vertex<Payload>, Vertex<Payload>) {
        (
            Vertex::new(("A", 1)),
            Vertex::new(("B", 2)),
            Vertex::new(("C", 3)),
        )
    }

    // The whole point of this layer: one body, any variant.
    fn grow_a_fork<G>() -> G
    where
        G: GrowableGraph + QueryableGraph<Value = Payload>,
    {
        let (a, b, c) = verts();
        let mut g = G::new();
        assert!(add_edge(&mut g, &a, &b));
        assert!(add_edge(&mut g, &a, &c));
        g
    }

    #[test]
    fn variants_are_interchangeable() {
        let (a, b, _) = verts();
        let dg: DirectedGraph<Payload> = grow_a_fork();
        let dag: DirectedAcyclicGraph<Payload> = grow_a_fork();
        let tree: Tree<Payload> = grow_a_fork();
        assert_eq!(count_edges(&dg), 2);
        assert_eq!(count_edges(&dag), 2);
        assert_eq!(count_edges(&tree), 2);
        assert!(adjacent(&dg, &a, &b));
        assert!(adjacent(&dag, &a, &b));
        assert!(adjacent(&tree, &a, &b));
        assert_eq!(top(&dg), Some(a.clone()));
        assert_eq!(top(&dag), Some(a.clone()));
        assert_eq!(top(&tree), Some(a));
    }

    #[test]
    fn rejection_is_the_variants_call() {
        let (a, _, c) = verts();
        let mut dg: DirectedGraph<Payload> = grow_a_fork();
        let mut dag: DirectedAcyclicGraph<Payload> = grow_a_fork();
        let mut tree: Tree<Payload> = grow_a_fork();
        // The same back edge, three different verdicts from one call site.
        assert!(add_edge(&mut dg, &c, &a));
        assert!(!add_edge(&mut dag, &c, &a));
        assert!(!add_edge(&mut tree, &c, &a));
    }

    #[test]
    fn neighbors_matches_adjacency_in_either_direction() {
        let (a, b, c) = verts();
        let g: DirectedGraph<Payload> = grow_a_fork();
        for u in [&a, &b, &c] {
            for v in [&a, &b, &c] {
                let listed = neighbors(&g, u).contains(v);
                let linked = adjacent(&g, u, v) || adjacent(&g, v, u);
                assert_eq!(listed, linked);
            }
        }
    }

    #[test]
    fn value_access_over_vertices_and_edges() {
        let (mut a, _, _) = verts();
        assert_eq!(value(&a), Some(&("A", 1)));
        set_value(&mut a, ("B", 2));
        assert_eq!(value(&a), Some(&("B", 2)));

        let mut e = Edge::weighted(Vertex::new(1u8), Vertex::new(2u8), ("w", 9));
        assert_eq!(value(&e), Some(&("w", 9)));
        set_value(&mut e, ("x", 10));
        assert_eq!(value(&e), Some(&("x", 10)));
    }

    #[test]
    fn weighted_edges_flow_through_the_layer() {
        let (a, b, _) = verts();
        let mut g: DirectedGraph<Payload, i32> = DirectedGraph::new();
        assert!(add_weighted_edge(&mut g, &a, &b, 7));
        let weights: Vec<_> = g.iter_edges().filter_map(|e| e.value()).collect();
        assert_eq!(weights, vec![&7]);
    }

    #[test]
    fn to_string_renders_null_slots() {
        let (a, _, _) = verts();
        let mut g: DirectedGraph<Payload> = DirectedGraph::new();
        add(&mut g, &a);
        assert_eq!(to_string(&g), "(\"A\", 1) -> NULL\n");
    }
}
