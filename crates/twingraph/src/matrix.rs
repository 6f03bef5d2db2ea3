//! A module providing an adjacency matrix representation of a directed, weighted graph.
//!
//! Vertices are the dense integers `0..n`; the weight of the edge `src -> dst` is stored in cell
//! `[src][dst]` of a square matrix, with zero meaning "no edge".
use crate::algorithms::{self, Distance};
use crate::config::GraphConfig;
use crate::errors::{IgnoreReason, Outcome};
use crate::{Graph, Weight};
use std::fmt;

/// A directed graph with positive integer weights, stored as an adjacency matrix.
///
/// - Vertices can only be added, never removed.
/// - Self-loops and zero weights are rejected.
/// - Adding an edge that already exists overwrites its weight.
///
/// # Examples
///
/// ```
/// use twingraph::{DirectedWeightedGraph, Graph};
/// use twingraph::algorithms::Distance;
///
/// let mut graph = DirectedWeightedGraph::<u32>::new();
/// for _ in 0..3 {
///     graph.add_vertex();
/// }
/// graph.add_edge(0, 1, 7);
/// graph.add_edge(1, 2, 2);
///
/// assert_eq!(vec![(0, 1, 7), (1, 2, 2)], graph.get_edges());
/// assert!(graph.is_valid_path(&[0, 1, 2]));
/// assert_eq!(vec![Distance::Finite(0), Distance::Finite(7), Distance::Finite(9)], graph.dijkstra(0));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DirectedWeightedGraph<W = u32> {
    matrix: Vec<Vec<W>>,
    config: GraphConfig,
}

impl<W: Weight> DirectedWeightedGraph<W> {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new, empty graph using the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            matrix: Vec::new(),
            config,
        }
    }

    /// Create a graph with `count` vertices and no edges.
    pub fn with_vertices(count: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..count {
            graph.add_vertex();
        }
        graph
    }

    /// Create a graph from a list of `(src, dst, weight)` edges.
    ///
    /// The graph gets `max(src, dst) + 1` vertices; the edges are then added with the same rules as
    /// [`Self::add_edge`], so invalid ones are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use twingraph::{DirectedWeightedGraph, Graph};
    ///
    /// let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 3, 2), (3, 3, 1), (2, 1, 0)]);
    /// assert_eq!(4, graph.num_vertices());
    /// assert_eq!(vec![(0, 3, 2)], graph.get_edges());
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize, W)>) -> Self {
        let edges = edges.into_iter().collect::<Vec<_>>();
        let count = edges.iter().map(|&(src, dst, _)| src.max(dst) + 1).max().unwrap_or(0);
        let mut graph = Self::with_vertices(count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Configuration of this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a new vertex with no incident edges, and returns the new number of vertices.
    ///
    /// The new vertex is identified by `count - 1`.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.matrix {
            row.push(W::zero());
        }
        let count = self.matrix.len() + 1;
        self.matrix.push(vec![W::zero(); count]);
        count
    }

    /// Adds an edge from `src` to `dst`, or changes its weight if it already exists.
    ///
    /// Ignored if the weight is zero, if `src == dst`, or if either vertex does not exist.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) -> Outcome {
        if weight < W::one() {
            return Outcome::ignored("add_edge", IgnoreReason::NonPositiveWeight);
        }
        if src == dst {
            return Outcome::ignored("add_edge", IgnoreReason::SelfLoop);
        }
        if let Err(reason) = self.check_vertex(src).and_then(|()| self.check_vertex(dst)) {
            return Outcome::ignored("add_edge", reason);
        }
        self.matrix[src][dst] = weight;
        Outcome::Applied
    }

    /// Adds an edge of weight 1 from `src` to `dst`. See [`Self::add_edge`].
    pub fn add_unit_edge(&mut self, src: usize, dst: usize) -> Outcome {
        self.add_edge(src, dst, W::one())
    }

    /// Removes the edge from `src` to `dst`.
    ///
    /// Ignored if either vertex does not exist. Removing an edge that is not there is not an error.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Outcome {
        if let Err(reason) = self.check_vertex(src).and_then(|()| self.check_vertex(dst)) {
            return Outcome::ignored("remove_edge", reason);
        }
        self.matrix[src][dst] = W::zero();
        Outcome::Applied
    }

    /// Returns all vertices, in ascending order.
    pub fn get_vertices(&self) -> Vec<usize> {
        (0..self.matrix.len()).collect()
    }

    /// Returns all edges as `(src, dst, weight)`, sorted by source and then destination.
    pub fn get_edges(&self) -> Vec<(usize, usize, W)> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(src, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| !w.is_zero())
                    .map(move |(dst, w)| (src, dst, *w))
            })
            .collect()
    }

    /// Weight of the edge from `src` to `dst`, if it exists.
    pub fn weight(&self, src: usize, dst: usize) -> Option<W> {
        let weight = *self.matrix.get(src)?.get(dst)?;
        (!weight.is_zero()).then_some(weight)
    }

    /// Returns the total number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.matrix.iter().flatten().filter(|w| !w.is_zero()).count()
    }

    /// Shortest distance from `src` to every vertex, indexed by vertex.
    ///
    /// Unreachable vertices are [`Distance::Infinite`]; if `src` does not exist, every vertex is.
    /// See [`algorithms::dijkstra`] for details.
    pub fn dijkstra(&self, src: usize) -> Vec<Distance<W>> {
        let mut distances = algorithms::dijkstra(self, &src, |&from, &to| self.matrix[from][to]);
        (0..self.matrix.len())
            .map(|v| distances.remove(&v).unwrap_or(Distance::Infinite))
            .collect()
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), IgnoreReason> {
        let count = self.matrix.len();
        if vertex < count {
            Ok(())
        } else {
            Err(IgnoreReason::VertexOutOfRange { vertex, count })
        }
    }
}

impl<W: Weight> Graph for DirectedWeightedGraph<W> {
    type Vertex = usize;

    fn vertices(&self) -> impl '_ + Iterator<Item = usize> {
        0..self.matrix.len()
    }

    fn has_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.matrix.len()
    }

    fn has_edge_between(&self, from: &usize, to: &usize) -> bool {
        self.weight(*from, *to).is_some()
    }

    fn successors(&self, vertex: &usize) -> impl '_ + Iterator<Item = usize> {
        self.matrix[*vertex]
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(dst, _)| dst)
    }

    fn has_cycle(&self) -> bool {
        if self.config.skips_cycle_search(self.matrix.len()) {
            log::debug!(
                "has_cycle: {} vertices is below the minimum of {}, reporting acyclic",
                self.matrix.len(),
                self.config.min_cycle_vertices
            );
            return false;
        }
        algorithms::has_directed_cycle(self)
    }

    fn num_vertices(&self) -> usize {
        self.matrix.len()
    }
}

impl<W: Weight> FromIterator<(usize, usize, W)> for DirectedWeightedGraph<W> {
    fn from_iter<T: IntoIterator<Item = (usize, usize, W)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl<W: Weight> fmt::Display for DirectedWeightedGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.matrix.len();
        if count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        writeln!(f, "GRAPH ({count} vertices):")?;
        let header = (0..count).map(|i| format!("{i:2}")).collect::<Vec<_>>();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(count * 3 + 3))?;
        for (i, row) in self.matrix.iter().enumerate() {
            let weights = row.iter().map(|w| format!("{w:2}")).collect::<Vec<_>>();
            writeln!(f, "{i:2} |{}", weights.join(" "))?;
        }
        Ok(())
    }
}
