//! Module of traversal algorithms.
use crate::Graph;
use std::collections::{HashSet, VecDeque};

/// Performs a depth-first search (DFS) traversal of the graph starting from `start`, and returns
/// the vertices in the order they were visited.
///
/// When a vertex has several successors, they are explored in ascending order. The traversal uses
/// an explicit stack, so its depth is not limited by the call stack.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `start`: The starting vertex. If it is not part of the graph, nothing is visited.
/// - `end`: Optional target vertex. The traversal stops right after visiting it; when it is never
///   reached, every vertex reachable from `start` is visited.
///
/// ### Example
///
/// ```
/// use twingraph::DirectedWeightedGraph;
/// use twingraph::algorithms::dfs;
///
/// let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 2, 1), (0, 1, 1), (1, 3, 1), (2, 3, 1)]);
///
/// assert_eq!(vec![0, 1, 3, 2], dfs(&graph, &0, None));
/// assert_eq!(vec![0, 1, 3], dfs(&graph, &0, Some(&3)));
/// assert!(dfs(&graph, &9, None).is_empty());
/// ```
pub fn dfs<G: Graph>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
    let mut visited = Vec::new();
    if !graph.has_vertex(start) {
        log::debug!("dfs: start vertex {start:?} is not in the graph");
        return visited;
    }
    let mut explored_nodes = HashSet::new();
    let mut stack = VecDeque::from_iter([start.clone()]);
    while let Some(node) = stack.pop_back() {
        if !explored_nodes.insert(node.clone()) {
            continue;
        }
        log::trace!("dfs: visiting {node:?}");
        visited.push(node.clone());
        if end == Some(&node) {
            break;
        }
        let successors = graph
            .successors(&node)
            .filter(|w| !explored_nodes.contains(w))
            .collect::<Vec<_>>();
        // Pushed in reverse so that the smallest successor is popped first
        stack.extend(successors.into_iter().rev());
    }
    visited
}

/// Performs a breadth-first search (BFS) traversal of the graph starting from `start`, and
/// returns the vertices in the order they were visited.
///
/// The graph is traversed layer by layer; successors of a vertex are queued in ascending order.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `start`: The starting vertex. If it is not part of the graph, nothing is visited.
/// - `end`: Optional target vertex, after which the traversal stops.
///
/// ### Example
///
/// ```
/// use twingraph::DirectedWeightedGraph;
/// use twingraph::algorithms::bfs;
///
/// let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 2, 1), (0, 1, 1), (1, 3, 1), (2, 3, 1)]);
///
/// assert_eq!(vec![0, 1, 2, 3], bfs(&graph, &0, None));
/// assert_eq!(vec![0, 1], bfs(&graph, &0, Some(&1)));
/// ```
pub fn bfs<G: Graph>(graph: &G, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
    let mut visited = Vec::new();
    if !graph.has_vertex(start) {
        log::debug!("bfs: start vertex {start:?} is not in the graph");
        return visited;
    }
    let mut explored_nodes = HashSet::new();
    let mut queue = VecDeque::from_iter([start.clone()]);
    while let Some(node) = queue.pop_front() {
        if !explored_nodes.insert(node.clone()) {
            continue;
        }
        log::trace!("bfs: visiting {node:?}");
        visited.push(node.clone());
        if end == Some(&node) {
            break;
        }
        queue.extend(graph.successors(&node).filter(|w| !explored_nodes.contains(w)));
    }
    visited
}

/// Counts the connected components of the graph, ignoring edge direction as far as the graph's
/// [`successors`](Graph::successors) do.
///
/// Vertices are considered in the graph's natural order; each unvisited vertex starts a new
/// depth-first search and a new component.
///
/// ### Example
///
/// ```
/// use twingraph::UndirectedGraph;
/// use twingraph::algorithms::count_connected_components;
///
/// let mut graph = UndirectedGraph::from_edges([("A", "B"), ("C", "D")]);
/// assert_eq!(2, count_connected_components(&graph));
///
/// graph.add_edge("B", "C");
/// assert_eq!(1, count_connected_components(&graph));
/// ```
pub fn count_connected_components<G: Graph>(graph: &G) -> usize {
    let mut explored_nodes = HashSet::new();
    let mut components = 0;
    for root in graph.vertices() {
        if explored_nodes.contains(&root) {
            continue;
        }
        components += 1;
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !explored_nodes.insert(node.clone()) {
                continue;
            }
            stack.extend(graph.successors(&node).filter(|w| !explored_nodes.contains(w)));
        }
    }
    components
}
