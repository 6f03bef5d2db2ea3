#![warn(missing_docs)]
//! # Graph datastructures
//!
//! Implements two small graph datastructures and the classic algorithms working with them:
//!
//! - [`DirectedWeightedGraph`]: dense integer vertices, positive integer weights stored in an
//!   adjacency matrix. Supports shortest paths through [`DirectedWeightedGraph::dijkstra`].
//! - [`UndirectedGraph`]: labelled vertices stored in an insertion-ordered adjacency list. Supports
//!   vertex removal and [connected component counting](UndirectedGraph::count_connected_components).
//!
//! Both implement the [`Graph`] trait, which gives them the same traversal, path validation and
//! cycle detection contracts.
//!
//! Mutations are tolerant: invalid input (self-loops, unknown vertices, zero weights) is ignored
//! rather than reported as an error. Every mutation returns an [`Outcome`] telling which no-op
//! fired, if any.
use num_traits::{PrimInt, Unsigned};
use std::fmt;
use std::hash::Hash;

pub mod adjacency;
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use adjacency::UndirectedGraph;
pub use config::GraphConfig;
pub use errors::{IgnoreReason, Outcome};
pub use matrix::DirectedWeightedGraph;

/// Edge weight of a [`DirectedWeightedGraph`]: any unsigned primitive integer.
///
/// Zero is reserved for "no edge", so every stored edge has a weight of at least one.
pub trait Weight: PrimInt + Unsigned + fmt::Debug + fmt::Display {}

impl<W: PrimInt + Unsigned + fmt::Debug + fmt::Display> Weight for W {}

/// A trait representing the capabilities shared by every graph of this crate.
///
/// Implementors provide structural access (vertices, edges between two vertices, successors); the
/// traversals and path checks are provided on top of it and behave identically regardless of the
/// storage.
///
/// # Examples
///
/// ```
/// use twingraph::{Graph, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges([("A", "B"), ("A", "C"), ("C", "D")]);
///
/// assert!(graph.has_vertex(&"D"));
/// assert!(graph.has_edge_between(&"B", &"A"));
/// assert_eq!(vec!["A", "B", "C", "D"], graph.dfs(&"A", None));
/// assert_eq!(vec!["C", "A", "D"], graph.bfs(&"C", Some(&"D")));
/// ```
pub trait Graph {
    /// Vertex identifier.
    type Vertex: Clone + Eq + Hash + Ord + fmt::Debug;

    /// Returns an iterator over all vertices, in the graph's natural order.
    fn vertices(&self) -> impl '_ + Iterator<Item = Self::Vertex>;

    /// Checks whether the graph contains a specific vertex.
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns true if an edge goes from `from` to `to`. For undirected graphs the order of the
    /// arguments does not matter.
    ///
    /// Returns false when either vertex does not exist.
    fn has_edge_between(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;

    /// Returns the vertices directly reachable from `vertex`, in ascending order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if the vertex does not exist in the graph.
    fn successors(&self, vertex: &Self::Vertex) -> impl '_ + Iterator<Item = Self::Vertex>;

    /// Returns true if the graph contains a cycle.
    fn has_cycle(&self) -> bool;

    /// Returns the total number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true if `path` can be walked along the edges of the graph.
    ///
    /// See [`algorithms::is_valid_path`].
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool
    where
        Self: Sized,
    {
        algorithms::is_valid_path(self, path)
    }

    /// Vertices visited by a depth-first search from `start`, stopping after `end` if given.
    ///
    /// See [`algorithms::dfs`].
    fn dfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::dfs(self, start, end)
    }

    /// Vertices visited by a breadth-first search from `start`, stopping after `end` if given.
    ///
    /// See [`algorithms::bfs`].
    fn bfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::bfs(self, start, end)
    }
}
