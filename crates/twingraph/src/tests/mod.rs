use super::*;
use rstest::rstest;

#[rstest]
fn test_shared_traversal_contract() {
    let directed = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 0, 1)]);
    let undirected = UndirectedGraph::from_edges([(0usize, 1), (1, 2), (2, 0), (3, 0)]);

    assert_eq!(vec![0, 1, 2], directed.dfs(&0, None));
    assert_eq!(vec![0, 1, 2, 3], undirected.dfs(&0, None));
    assert_eq!(vec![3, 0, 1, 2], directed.bfs(&3, None));
    assert_eq!(vec![3, 0, 1, 2], undirected.bfs(&3, None));
    assert!(directed.dfs(&9, None).is_empty());
    assert!(undirected.bfs(&9, None).is_empty());
}

#[rstest]
fn test_direction_matters_for_paths() {
    let directed = DirectedWeightedGraph::<u32>::from_edges([(0, 1, 1), (1, 2, 1)]);
    let undirected = UndirectedGraph::from_edges([(0usize, 1), (1, 2)]);

    assert!(directed.is_valid_path(&[0, 1, 2]));
    assert!(!directed.is_valid_path(&[2, 1, 0]));
    assert!(undirected.is_valid_path(&[2, 1, 0]));
}

#[rstest]
#[case(2, true)]
#[case(3, false)]
fn test_cycle_threshold_applies_to_both(#[case] min_cycle_vertices: usize, #[case] expected: bool) {
    let config = GraphConfig::new().min_cycle_vertices(min_cycle_vertices);

    let mut directed = DirectedWeightedGraph::<u32>::with_config(config);
    directed.add_vertex();
    directed.add_vertex();
    directed.add_edge(0, 1, 1);
    directed.add_edge(1, 0, 1);
    assert_eq!(expected, directed.has_cycle());

    // Two vertices cannot form an undirected cycle regardless of the threshold
    let mut undirected = UndirectedGraph::with_config(config);
    undirected.add_edge('A', 'B');
    assert!(!undirected.has_cycle());
}
