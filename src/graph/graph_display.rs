use crate::graph::*;

/// A default implementation of dumping a graph, one stored edge per
/// line, in insertion order.
///
/// Placeholders show their absent sink as `NULL`:
///
/// ```text
/// ("A", 1) -> ("B", 2)
/// ("C", 3) -> NULL
/// ```
pub struct GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
}

impl<'a, G> GraphDisplay<'a, G>
where
    G: QueryableGraph,
{
    pub(crate) fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<'a, G> std::fmt::Display for GraphDisplay<'a, G>
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.graph.iter_edges() {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}
