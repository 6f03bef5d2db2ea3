//! Module of path algorithms: path validation and single-source shortest paths.
use crate::{Graph, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

/// Returns true if `path` can be walked along the edges of the graph.
///
/// - The empty path is valid.
/// - A single-vertex path is valid if that vertex exists.
/// - Longer paths are valid if every vertex exists and every consecutive pair is connected by an
///   edge (in that direction, for directed graphs).
///
/// ### Example
///
/// ```
/// use twingraph::DirectedWeightedGraph;
/// use twingraph::algorithms::is_valid_path;
///
/// let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 10), (1, 2, 3)]);
///
/// assert!(is_valid_path(&graph, &[0, 1, 2]));
/// assert!(!is_valid_path(&graph, &[2, 1]));
/// assert!(is_valid_path(&graph, &[]));
/// assert!(is_valid_path(&graph, &[2]));
/// assert!(!is_valid_path(&graph, &[3]));
/// ```
pub fn is_valid_path<G: Graph>(graph: &G, path: &[G::Vertex]) -> bool {
    path.iter().all(|v| graph.has_vertex(v)) && path.windows(2).all(|pair| graph.has_edge_between(&pair[0], &pair[1]))
}

/// Length of a shortest path.
///
/// Finite distances compare lower than [`Distance::Infinite`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Distance<W> {
    /// Sum of the weights along a shortest path.
    Finite(W),
    /// No path exists.
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns the finite distance, if there is one.
    pub fn finite(&self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(*w),
            Self::Infinite => None,
        }
    }

    /// Returns true if the target is reachable.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(w) => w.fmt(f),
            Self::Infinite => f.pad("inf"),
        }
    }
}

/// Entry of the Dijkstra priority queue.
///
/// [`BinaryHeap`] is a max-heap, so the ordering is reversed: the smallest distance is the
/// greatest entry, and among equal distances the earliest inserted one wins.
#[derive(Debug)]
struct Candidate<V, W> {
    distance: W,
    sequence: u64,
    vertex: V,
}

impl<V, W: Ord> Ord for Candidate<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V, W: Ord> PartialOrd for Candidate<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Ord> PartialEq for Candidate<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Ord> Eq for Candidate<V, W> {}

/// Finds the shortest path from a starting vertex to all other vertices in a graph using
/// Dijkstra's algorithm.
///
/// Vertices are finalized the first time they are popped from a binary heap keyed by tentative
/// distance. Candidates with the same tentative distance are popped in insertion order.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `source`: The starting vertex for the shortest path computation.
/// - `edge_weight`: A closure that returns the weight of the edge between two adjacent vertices.
///
/// ### Returns
///
/// A map with an entry for every vertex of the graph. Unreachable vertices (all of them, if
/// `source` is not part of the graph) map to [`Distance::Infinite`]. A path whose length does not
/// fit in `W` is treated as nonexistent.
///
/// ### Example
///
/// ```rust
/// use twingraph::{DirectedWeightedGraph, Graph};
/// use twingraph::algorithms::{dijkstra, Distance};
///
/// let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 4), (0, 2, 1), (2, 1, 2)]);
/// let distances = dijkstra(&graph, &0, |from, to| graph.weight(*from, *to).unwrap_or(0));
///
/// assert_eq!(Distance::Finite(3), distances[&1]);
/// assert_eq!(Distance::Finite(1), distances[&2]);
/// ```
pub fn dijkstra<G: Graph, W: Weight>(
    graph: &G,
    source: &G::Vertex,
    edge_weight: impl Fn(&G::Vertex, &G::Vertex) -> W,
) -> HashMap<G::Vertex, Distance<W>> {
    let mut distances = HashMap::from_iter(graph.vertices().map(|v| (v, Distance::Infinite)));
    if !graph.has_vertex(source) {
        log::debug!("dijkstra: source {source:?} is not in the graph");
        return distances;
    }

    let mut finalized = HashSet::new();
    let mut sequence = 0;
    let mut queue = BinaryHeap::from_iter([Candidate {
        distance: W::zero(),
        sequence,
        vertex: source.clone(),
    }]);
    while let Some(Candidate { distance, vertex, .. }) = queue.pop() {
        if !finalized.insert(vertex.clone()) {
            continue;
        }
        log::trace!("dijkstra: {vertex:?} finalized at {distance}");
        distances.insert(vertex.clone(), Distance::Finite(distance));
        for next in graph.successors(&vertex) {
            if finalized.contains(&next) {
                continue;
            }
            let Some(total) = distance.checked_add(&edge_weight(&vertex, &next)) else {
                log::warn!("dijkstra: distance to {next:?} through {vertex:?} overflows, skipping");
                continue;
            };
            sequence += 1;
            queue.push(Candidate {
                distance: total,
                sequence,
                vertex: next,
            });
        }
    }

    distances
}
