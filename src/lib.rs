//! Directed graph, DAG and tree containers keyed by vertex values.
//!
//! # Value-keyed graphs
//!
//! Some graph libraries hand out lightweight IDs and make users keep a
//! side table from IDs to their own data.
//! In this crate, vertices *are* their values.
//! Two vertices with equal payloads are the same vertex to every
//! operation, and every graph stores private clones of whatever the
//! caller passes in, so callers keep full ownership of their originals.
//!
//! # Three variants, one contract
//!
//! [DirectedGraph](graph::DirectedGraph) accepts every mutation,
//! [DirectedAcyclicGraph](graph::DirectedAcyclicGraph) rejects edges that
//! would close a directed cycle, and [Tree](graph::Tree) additionally
//! rejects edges that would give a vertex a second parent.
//! None of them inherits from a common base.
//! Each independently implements the capability traits in [graph]
//! ([QueryableGraph](graph::QueryableGraph),
//! [GrowableGraph](graph::GrowableGraph),
//! [VertexShrinkableGraph](graph::VertexShrinkableGraph)), and the free
//! functions in [ops] are written against those traits alone, so the
//! variants are interchangeable at every call site.
//!
//! Invariant-enforcing insertions report rejection as `false` and leave
//! the graph untouched.
//! There is nothing to roll back: validation happens before anything is
//! stored.

pub mod algorithm;
pub mod graph;
pub mod ops;
