use crate::graph::Valued;

/// A vertex, identified by its payload.
///
/// Equality is structural: two vertices wrapping equal payloads are
/// indistinguishable to every graph operation.
/// Graphs clone vertices on insertion, so a caller's `Vertex` is never
/// aliased by a graph that stored it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vertex<V>(V);

impl<V> Vertex<V> {
    pub fn new(value: V) -> Self {
        Self(value)
    }

    pub fn into_value(self) -> V {
        self.0
    }
}

impl<V> Valued for Vertex<V> {
    type Value = V;

    /// Always `Some`: a vertex cannot exist without a payload.
    fn value(&self) -> Option<&V> {
        Some(&self.0)
    }

    fn set_value(&mut self, value: V) {
        self.0 = value;
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Vertex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<V> From<V> for Vertex<V> {
    fn from(value: V) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        let a = Vertex::new(("A", 1));
        let b = Vertex::new(("A", 1));
        let c = Vertex::new(("C", 3));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn value_roundtrip() {
        let mut v = Vertex::new(("A", 1));
        assert_eq!(v.value(), Some(&("A", 1)));
        v.set_value(("B", 2));
        assert_eq!(v.value(), Some(&("B", 2)));
    }
}
