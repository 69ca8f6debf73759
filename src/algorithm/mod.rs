//! Algorithms over anything [QueryableGraph](crate::graph::QueryableGraph),
//! expressed as blanket traits.

mod reachability;
pub use self::reachability::*;
