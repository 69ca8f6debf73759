//! The shared data model, the capability traits, and the three graph
//! variants.
//!
//! # Capability traits instead of a base type
//!
//! There is no `Graph` supertype.
//! A variant is whatever implements [QueryableGraph] (read side),
//! [GrowableGraph] (insertion) and [VertexShrinkableGraph] (removal);
//! generic code names the capabilities it needs and nothing more.
//! The read side is entirely derived from
//! [iter_edges](QueryableGraph::iter_edges), which keeps every variant's
//! query behavior identical by construction — only the mutation rules
//! differ.
//!
//! # Edge-list representation
//!
//! Every variant owns a plain insertion-ordered edge list.
//! Isolated vertices are stored as placeholder edges with an absent
//! sink, and [vertex_count](QueryableGraph::vertex_count) counts
//! occupied endpoint slots, not distinct values.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_display;
pub use self::graph_display::*;

pub mod directed;
pub use self::directed::*;
