//! Module of algorithms working on graphs.
//!
//! Everything here is generic over the [`Graph`](crate::Graph) trait, so it applies to both the
//! adjacency matrix and the adjacency list representations.
pub mod cycles;
pub mod path;
pub mod traversal;

pub use cycles::*;
pub use path::*;
pub use traversal::*;
