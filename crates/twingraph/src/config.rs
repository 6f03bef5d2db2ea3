//! Per-graph configuration.

/// Behavior knobs shared by both graph types.
///
/// # Examples
///
/// ```
/// use twingraph::{DirectedWeightedGraph, Graph, GraphConfig};
///
/// let mut graph = DirectedWeightedGraph::<u32>::with_config(GraphConfig::new().min_cycle_vertices(2));
/// graph.add_vertex();
/// graph.add_vertex();
/// graph.add_edge(0, 1, 1);
/// graph.add_edge(1, 0, 1);
/// assert!(graph.has_cycle());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GraphConfig {
    /// Graphs with fewer vertices than this are reported acyclic without being searched.
    ///
    /// Defaults to 3. This is exact for undirected graphs (a simple cycle needs three distinct
    /// vertices), but it hides two-vertex cycles `u -> v -> u` in directed graphs. Lower it to 2 to
    /// search every directed graph.
    pub min_cycle_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { min_cycle_vertices: 3 }
    }
}

impl GraphConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`Self::min_cycle_vertices`].
    pub fn min_cycle_vertices(mut self, count: usize) -> Self {
        self.min_cycle_vertices = count;
        self
    }

    pub(crate) fn skips_cycle_search(&self, num_vertices: usize) -> bool {
        num_vertices < self.min_cycle_vertices
    }
}
