//! A module providing an adjacency list representation of an undirected graph.
//!
//! This module defines the [`UndirectedGraph`] struct and its implementation, supporting vertex and
//! edge insertion and removal, traversals, cycle detection and connected component counting.
use crate::algorithms;
use crate::config::GraphConfig;
use crate::errors::{IgnoreReason, Outcome};
use crate::Graph;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// Joined entries shorter than this are rendered on a single line by the [`fmt::Display`] impl.
const SINGLE_LINE_WIDTH: usize = 70;

/// An undirected, unweighted graph with labelled vertices, represented as an adjacency list.
///
/// Each edge `{u, v}` is stored twice: `v` is in the neighbors of `u` and `u` is in the neighbors
/// of `v`. Every method keeps both directions in sync.
///
/// Vertices are kept in insertion order, and neighbors of a vertex in the order their edges were
/// added. Self-loops and duplicate edges are rejected.
///
/// # Examples
///
/// ```
/// use twingraph::{Graph, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// graph.add_vertex("D");
///
/// assert_eq!(vec!["A", "B", "C", "D"], graph.get_vertices());
/// assert_eq!(vec![("A", "B"), ("B", "C")], graph.get_edges());
/// assert_eq!(2, graph.count_connected_components());
/// assert!(graph.is_valid_path(&["C", "B", "A"]));
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V = String> {
    /// A mapping of each vertex to its neighbors.
    adjacency: IndexMap<V, Vec<V>>,
    config: GraphConfig,
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::default(),
            config: GraphConfig::default(),
        }
    }
}

impl<V: Clone + Eq + Hash + Ord + fmt::Debug> UndirectedGraph<V> {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty graph using the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::new(),
            config,
        }
    }

    /// Create a graph by adding every edge of `edges`, in order.
    ///
    /// Vertices are created as needed; self-loops are skipped.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Configuration of this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a vertex with no neighbors.
    ///
    /// Ignored if the vertex already exists; its edges are kept.
    pub fn add_vertex(&mut self, vertex: V) -> Outcome {
        if self.adjacency.contains_key(&vertex) {
            return Outcome::ignored("add_vertex", IgnoreReason::VertexExists);
        }
        self.adjacency.insert(vertex, Vec::new());
        Outcome::Applied
    }

    /// Adds an edge between `u` and `v`, creating either vertex if needed.
    ///
    /// Ignored if `u == v`. Adding an edge that already exists leaves the graph unchanged.
    pub fn add_edge(&mut self, u: V, v: V) -> Outcome {
        if u == v {
            return Outcome::ignored("add_edge", IgnoreReason::SelfLoop);
        }
        let neighbors = self.adjacency.entry(u.clone()).or_default();
        if !neighbors.contains(&v) {
            neighbors.push(v.clone());
        }
        let neighbors = self.adjacency.entry(v).or_default();
        if !neighbors.contains(&u) {
            neighbors.push(u);
        }
        Outcome::Applied
    }

    /// Removes the edge between `u` and `v`.
    ///
    /// Ignored if either vertex does not exist, or if they are not connected.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Outcome {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return Outcome::ignored("remove_edge", IgnoreReason::MissingVertex);
        }
        let removed = Self::unlink(&mut self.adjacency[u], v);
        let removed_back = Self::unlink(&mut self.adjacency[v], u);
        debug_assert_eq!(removed, removed_back, "adjacency lists out of sync");
        if removed || removed_back {
            Outcome::Applied
        } else {
            Outcome::ignored("remove_edge", IgnoreReason::MissingEdge)
        }
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Ignored if the vertex does not exist. The remaining vertices keep their order.
    pub fn remove_vertex(&mut self, vertex: &V) -> Outcome {
        let Some(neighbors) = self.adjacency.shift_remove(vertex) else {
            return Outcome::ignored("remove_vertex", IgnoreReason::MissingVertex);
        };
        for neighbor in &neighbors {
            if let Some(list) = self.adjacency.get_mut(neighbor) {
                Self::unlink(list, vertex);
            }
        }
        Outcome::Applied
    }

    /// Returns all vertices, in insertion order.
    pub fn get_vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Returns every edge once, as the pair `(u, v)` where `u` is the endpoint inserted first.
    ///
    /// Edges are ordered by their first endpoint, then by the order in which they were added to it.
    pub fn get_edges(&self) -> Vec<(V, V)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(index, (u, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |v| self.adjacency.get_index_of(*v).is_some_and(|i| i > index))
                    .map(move |v| (u.clone(), v.clone()))
            })
            .collect()
    }

    /// Neighbors of `vertex`, in the order their edges were added. `None` if the vertex does not
    /// exist.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Returns the total number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the number of connected components. See
    /// [`algorithms::count_connected_components`].
    pub fn count_connected_components(&self) -> usize {
        algorithms::count_connected_components(self)
    }

    fn unlink(list: &mut Vec<V>, vertex: &V) -> bool {
        match list.iter().position(|v| v == vertex) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<V: Clone + Eq + Hash + Ord + fmt::Debug> Graph for UndirectedGraph<V> {
    type Vertex = V;

    fn vertices(&self) -> impl '_ + Iterator<Item = V> {
        self.adjacency.keys().cloned()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge_between(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    fn successors(&self, vertex: &V) -> impl '_ + Iterator<Item = V> {
        let mut neighbors = self.adjacency[vertex].clone();
        neighbors.sort();
        neighbors.into_iter()
    }

    fn has_cycle(&self) -> bool {
        if self.config.skips_cycle_search(self.adjacency.len()) {
            return false;
        }
        algorithms::has_undirected_cycle(self)
    }

    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V: Clone + Eq + Hash + Ord + fmt::Debug> FromIterator<(V, V)> for UndirectedGraph<V> {
    fn from_iter<T: IntoIterator<Item = (V, V)>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}

impl<V: fmt::Display> fmt::Display for UndirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .adjacency
            .iter()
            .map(|(vertex, neighbors)| {
                let neighbors = neighbors.iter().map(ToString::to_string).collect::<Vec<_>>();
                format!("{vertex}: [{}]", neighbors.join(", "))
            })
            .collect::<Vec<_>>();
        let multiline = entries.join("\n  ");
        if multiline.chars().count() < SINGLE_LINE_WIDTH {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {multiline}}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn pairs(list: &[&'static str]) -> Vec<(char, char)> {
        list.iter()
            .map(|s| {
                let mut chars = s.chars();
                (chars.next().unwrap(), chars.next().unwrap())
            })
            .collect()
    }

    #[fixture]
    fn sample() -> UndirectedGraph<char> {
        UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]))
    }

    #[rstest]
    fn test_add_vertex_and_edges() {
        let mut graph = UndirectedGraph::new();
        for v in "ABCDE".chars() {
            assert!(graph.add_vertex(v).is_applied());
        }
        assert_eq!(Some(IgnoreReason::VertexExists), graph.add_vertex('A').reason());
        for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE", "BC"]) {
            assert!(graph.add_edge(u, v).is_applied());
        }
        assert_eq!(Some(IgnoreReason::SelfLoop), graph.add_edge('E', 'E').reason());
        assert_eq!(Some(&['A', 'B', 'D', 'E'][..]), graph.neighbors(&'C'));
        assert_eq!(7, graph.num_edges());
    }

    #[rstest]
    fn test_add_vertex_keeps_edges(mut sample: UndirectedGraph<char>) {
        sample.add_vertex('A');
        assert_eq!(Some(&['B', 'C'][..]), sample.neighbors(&'A'));
        assert!(sample.has_edge_between(&'B', &'A'));
    }

    #[rstest]
    fn test_remove_edge_and_vertex(mut sample: UndirectedGraph<char>) {
        assert_eq!(Some(IgnoreReason::MissingVertex), sample.remove_vertex(&'Z').reason());
        assert!(sample.remove_edge(&'A', &'B').is_applied());
        assert_eq!(Some(IgnoreReason::MissingVertex), sample.remove_edge(&'X', &'B').reason());
        assert_eq!(Some(IgnoreReason::MissingEdge), sample.remove_edge(&'A', &'B').reason());
        assert_eq!(Some(&['C', 'D'][..]), sample.neighbors(&'B'));

        assert!(sample.remove_vertex(&'D').is_applied());
        assert_eq!(vec!['A', 'B', 'C', 'E'], sample.get_vertices());
        assert_eq!(vec![('A', 'C'), ('B', 'C'), ('C', 'E')], sample.get_edges());
        assert_eq!("GRAPH: {A: [C], B: [C], C: [A, B, E], E: [C]}", sample.to_string());
    }

    #[rstest]
    fn test_get_edges() {
        let empty = UndirectedGraph::<char>::new();
        assert!(empty.get_edges().is_empty());
        assert!(empty.get_vertices().is_empty());

        let graph = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE"]));
        assert_eq!(
            vec![('A', 'B'), ('A', 'C'), ('B', 'C'), ('B', 'D'), ('C', 'D'), ('C', 'E')],
            graph.get_edges()
        );
        assert_eq!(vec!['A', 'B', 'C', 'D', 'E'], graph.get_vertices());
    }

    #[rstest]
    fn test_get_edges_follows_first_endpoint() {
        // `B` is inserted before `A`, so the edge is reported from `B`
        let graph = UndirectedGraph::from_edges([('B', 'C'), ('A', 'B')]);
        assert_eq!(vec![('B', 'C'), ('B', 'A')], graph.get_edges());
    }

    #[rstest]
    #[case("ABC", true)]
    #[case("ADE", false)]
    #[case("ECABDCBE", false)]
    #[case("ACDECB", true)]
    #[case("", true)]
    #[case("D", true)]
    #[case("Z", false)]
    #[case("AA", false)]
    fn test_is_valid_path(sample: UndirectedGraph<char>, #[case] path: &str, #[case] expected: bool) {
        let path = path.chars().collect::<Vec<_>>();
        assert_eq!(expected, sample.is_valid_path(&path));
    }

    #[rstest]
    fn test_components_sequence() {
        let mut graph = UndirectedGraph::from_edges(pairs(&["AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG"]));
        let commands = [
            "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB", "remove CE", "remove DE",
            "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ", "add EG", "add QH", "remove CD", "remove BD",
            "remove QG",
        ];
        let counts = commands
            .iter()
            .map(|command| {
                apply(&mut graph, command);
                graph.count_connected_components()
            })
            .collect::<Vec<_>>();
        assert_eq!(vec![1, 2, 3, 4, 4, 5, 5, 5, 6, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 2], counts);
    }

    #[rstest]
    fn test_has_cycle_sequence() {
        let mut graph = UndirectedGraph::from_edges(pairs(&["AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG"]));
        let commands = [
            ("add QH", true),
            ("remove FG", true),
            ("remove GQ", true),
            ("remove HQ", true),
            ("remove AE", true),
            ("remove CA", true),
            ("remove EB", true),
            ("remove CE", true),
            ("remove DE", true),
            ("remove BC", false),
            ("add EA", false),
            ("add EF", false),
            ("add GQ", false),
            ("add AC", false),
            ("add DQ", false),
            ("add EG", true),
            ("add QH", true),
            ("remove CD", true),
            ("remove BD", false),
            ("remove QG", false),
            ("add FG", true),
            ("remove GE", false),
        ];
        for (command, expected) in commands {
            apply(&mut graph, command);
            assert_eq!(expected, graph.has_cycle(), "after `{command}`");
        }
    }

    #[rstest]
    fn test_small_graphs_are_acyclic() {
        let graph = UndirectedGraph::from_edges([("A", "B")]);
        assert!(!graph.has_cycle());
        assert!(!UndirectedGraph::<String>::new().has_cycle());
    }

    #[rstest]
    fn test_display() {
        assert_eq!("GRAPH: {}", UndirectedGraph::<char>::new().to_string());

        let mut graph = UndirectedGraph::new();
        for v in "ABCDE".chars() {
            graph.add_vertex(v);
        }
        assert_eq!("GRAPH: {A: [], B: [], C: [], D: [], E: []}", graph.to_string());

        for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]) {
            graph.add_edge(u, v);
        }
        assert_eq!(
            "GRAPH: {A: [B, C], B: [A, C, D], C: [A, B, D, E], D: [B, C, E], E: [C, D]}",
            graph.to_string()
        );

        graph.add_edge('E', 'F');
        insta::assert_snapshot!(graph.to_string(), @r"
GRAPH: {
  A: [B, C]
  B: [A, C, D]
  C: [A, B, D, E]
  D: [B, C, E]
  E: [C, D, F]
  F: [E]}
");
    }

    fn apply(graph: &mut UndirectedGraph<char>, command: &str) {
        let (verb, edge) = command.split_once(' ').unwrap();
        let mut chars = edge.chars();
        let (u, v) = (chars.next().unwrap(), chars.next().unwrap());
        if verb == "add" {
            graph.add_edge(u, v);
        } else {
            graph.remove_edge(&u, &v);
        }
    }
}
