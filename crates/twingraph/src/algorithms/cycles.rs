//! Module of cycle detection algorithms.
use crate::Graph;
use std::collections::{HashMap, HashSet};

/// State of a vertex during a directed depth-first search. Vertices not yet discovered are simply
/// absent from the state map.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Mark {
    /// Vertex is on the current DFS path.
    OnPath,
    /// Vertex and all its descendants have been fully explored.
    Done,
}

/// Determines whether the directed graph contains a cycle.
///
/// Runs an iterative depth-first search from every undiscovered vertex, in the graph's natural
/// order, and reports a cycle on the first back edge: an edge into a vertex still on the current
/// DFS path.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait. Its
///   [`successors`](Graph::successors) are taken as directed edges.
///
/// ### Returns
///
/// - `true` if a cycle exists in the graph;
/// - `false` if the graph is acyclic.
///
/// ### Example
///
/// ```
/// use twingraph::DirectedWeightedGraph;
/// use twingraph::algorithms::has_directed_cycle;
///
/// let mut graph = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (1, 2, 1)]);
/// assert!(!has_directed_cycle(&graph));
///
/// graph.add_edge(2, 0, 1);
/// assert!(has_directed_cycle(&graph));
/// ```
pub fn has_directed_cycle<G: Graph>(graph: &G) -> bool {
    let mut marks = HashMap::new();
    for root in graph.vertices() {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root.clone(), Mark::OnPath);
        let successors = graph.successors(&root).collect::<Vec<_>>().into_iter();
        let mut stack = vec![(root, successors)];
        while let Some((node, successors)) = stack.last_mut() {
            let Some(next) = successors.next() else {
                marks.insert(node.clone(), Mark::Done);
                stack.pop();
                continue;
            };
            match marks.get(&next).copied() {
                Some(Mark::OnPath) => {
                    log::debug!("has_directed_cycle: back edge {node:?} -> {next:?}");
                    return true;
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next.clone(), Mark::OnPath);
                    let successors = graph.successors(&next).collect::<Vec<_>>().into_iter();
                    stack.push((next, successors));
                }
            }
        }
    }
    false
}

/// Determines whether the undirected graph contains a cycle.
///
/// Every vertex remembers the neighbor it was discovered from; finding an already discovered
/// neighbor that is not that parent closes a cycle. This relies on the graph having no self-loops
/// and no parallel edges.
///
/// ### Example
///
/// ```
/// use twingraph::UndirectedGraph;
/// use twingraph::algorithms::has_undirected_cycle;
///
/// let mut graph = UndirectedGraph::from_edges([("A", "B"), ("B", "C")]);
/// assert!(!has_undirected_cycle(&graph));
///
/// graph.add_edge("C", "A");
/// assert!(has_undirected_cycle(&graph));
/// ```
pub fn has_undirected_cycle<G: Graph>(graph: &G) -> bool {
    let mut explored_nodes = HashSet::new();
    for root in graph.vertices() {
        if !explored_nodes.insert(root.clone()) {
            continue;
        }
        let mut stack = vec![(root, None::<G::Vertex>)];
        while let Some((node, parent)) = stack.pop() {
            for next in graph.successors(&node) {
                if parent.as_ref() == Some(&next) {
                    continue;
                }
                if !explored_nodes.insert(next.clone()) {
                    log::debug!("has_undirected_cycle: {node:?} reaches already discovered {next:?}");
                    return true;
                }
                stack.push((next, Some(node.clone())));
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedWeightedGraph, UndirectedGraph};
    use rstest::rstest;

    #[rstest]
    fn test_directed_triangle() {
        let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 3), (1, 2, 4), (2, 0, 5)]);
        assert!(has_directed_cycle(&graph));
    }

    #[rstest]
    fn test_directed_chain_and_diamond() {
        let chain = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        assert!(!has_directed_cycle(&chain));

        // Two paths into the same vertex are a cross edge, not a back edge
        let diamond = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        assert!(!has_directed_cycle(&diamond));
    }

    #[rstest]
    fn test_directed_two_cycle() {
        let graph = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (1, 0, 1)]);
        assert!(has_directed_cycle(&graph));
    }

    #[rstest]
    fn test_directed_cycle_in_later_root() {
        // Vertex 0 is a sink; the cycle is only found when starting from a later root
        let graph = DirectedWeightedGraph::<u32>::from_edges([(1, 0, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)]);
        assert!(has_directed_cycle(&graph));
    }

    #[rstest]
    fn test_undirected() {
        let triangle = UndirectedGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        assert!(has_undirected_cycle(&triangle));

        let star = UndirectedGraph::from_edges([("A", "B"), ("A", "C"), ("A", "D"), ("E", "F")]);
        assert!(!has_undirected_cycle(&star));

        let square = UndirectedGraph::from_edges([("X", "A"), ("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        assert!(has_undirected_cycle(&square));
    }
}
