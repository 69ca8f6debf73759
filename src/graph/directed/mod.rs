//! The three graph variants.
//!
//! All of them store insertion-ordered edge lists and answer queries
//! identically; they differ only in which mutations they accept.

mod digraph;
pub use self::digraph::*;
mod dag;
pub use self::dag::*;
mod tree;
pub use self::tree::*;

#[cfg(test)]
pub use self::tests::*;
