use crate::graph::{Valued, Vertex};

/// A stored edge: two independently optional endpoint slots plus an
/// optional weight.
///
/// An edge with a source but no sink is a *placeholder*, the
/// representation of an isolated vertex.
/// Weights are payloads of the edge itself, unrelated to vertex payloads.
#[derive(Clone)]
pub struct Edge<V, W = ()> {
    source: Option<Vertex<V>>,
    sink: Option<Vertex<V>>,
    weight: Option<W>,
}

impl<V, W> Edge<V, W> {
    /// A placeholder marking `source` as an isolated vertex.
    pub fn placeholder(source: Vertex<V>) -> Self {
        Self {
            source: Some(source),
            sink: None,
            weight: None,
        }
    }

    pub fn between(source: Vertex<V>, sink: Vertex<V>) -> Self {
        Self {
            source: Some(source),
            sink: Some(sink),
            weight: None,
        }
    }

    pub fn weighted(source: Vertex<V>, sink: Vertex<V>, weight: W) -> Self {
        Self {
            source: Some(source),
            sink: Some(sink),
            weight: Some(weight),
        }
    }

    pub fn source(&self) -> Option<&Vertex<V>> {
        self.source.as_ref()
    }

    pub fn sink(&self) -> Option<&Vertex<V>> {
        self.sink.as_ref()
    }

    /// True iff both endpoint slots are occupied.
    ///
    /// Only complete edges count as edges; everything else is a
    /// placeholder or empty.
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.sink.is_some()
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_some() && self.sink.is_none()
    }

    /// Occupied endpoint slots, 0 to 2.
    pub fn occupied_slots(&self) -> usize {
        usize::from(self.source.is_some()) + usize::from(self.sink.is_some())
    }
}

/// Endpoint-only equality.
///
/// Two edges are equal iff both their source slots and both their sink
/// slots compare equal; an absent slot never equals an occupied one.
/// Weights are deliberately excluded.
impl<V: PartialEq, W> PartialEq for Edge<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.sink == other.sink
    }
}

impl<V: Eq, W> Eq for Edge<V, W> {}

impl<V, W> Valued for Edge<V, W> {
    type Value = W;

    fn value(&self) -> Option<&W> {
        self.weight.as_ref()
    }

    fn set_value(&mut self, weight: W) {
        self.weight = Some(weight);
    }
}

/// Renders `"<source> -> <sink>"`, with absent slots as the literal
/// `NULL`.
/// Endpoints print through the payload's `Debug`, so tuple payloads come
/// out as `("A", 1)`.
impl<V: std::fmt::Debug, W> std::fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(v) => write!(f, "{:?}", v)?,
            None => write!(f, "NULL")?,
        }
        write!(f, " -> ")?;
        match &self.sink {
            Some(v) => write!(f, "{:?}", v),
            None => write!(f, "NULL"),
        }
    }
}

impl<V: std::fmt::Debug, W> std::fmt::Debug for Edge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
