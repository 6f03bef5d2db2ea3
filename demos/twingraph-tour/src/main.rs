//! Walks through both graph types, printing the result of each operation.
//!
//! Set `RUST_LOG=debug` to see which mutations were ignored and why.
use log::LevelFilter;
use twingraph::algorithms::Distance;
use twingraph::{DirectedWeightedGraph, Graph, UndirectedGraph};

const DIRECTED_EDGES: [(usize, usize, u32); 7] = [(0, 1, 10), (4, 0, 12), (1, 4, 15), (4, 3, 3), (3, 1, 5), (2, 1, 23), (3, 2, 7)];

const UNDIRECTED_EDGES: [&str; 11] = ["AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG"];

fn main() {
    env_logger::builder()
        .default_format()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    directed_tour();
    undirected_tour();
}

fn directed_tour() {
    log::info!("Directed weighted graph");

    let mut graph = DirectedWeightedGraph::<u32>::new();
    print!("{graph}");
    println!("edges: {:?} vertices: {:?}", graph.get_edges(), graph.get_vertices());
    for _ in 0..5 {
        graph.add_vertex();
    }
    print!("{graph}");
    for (src, dst, weight) in [(0, 1, 10), (4, 0, 12), (1, 4, 15), (4, 3, 3), (3, 1, 5), (2, 1, 23), (3, 2, 7), (0, 0, 5), (0, 9, 2)] {
        let outcome = graph.add_edge(src, dst, weight);
        if let Some(reason) = outcome.reason() {
            println!("add_edge({src}, {dst}, {weight}) ignored: {reason}");
        }
    }
    print!("{graph}");

    let graph = DirectedWeightedGraph::from_edges(DIRECTED_EDGES);
    println!("edges: {:?}", graph.get_edges());
    let paths: [&[usize]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in paths {
        println!("{path:?} valid: {}", graph.is_valid_path(path));
    }
    for start in graph.get_vertices() {
        println!("{start} DFS: {:?} BFS: {:?}", graph.dfs(&start, None), graph.bfs(&start, None));
    }

    let mut graph = DirectedWeightedGraph::from_edges(DIRECTED_EDGES);
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        graph.remove_edge(src, dst);
        println!("remove {src}->{dst} cycle: {}", graph.has_cycle());
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        graph.add_unit_edge(src, dst);
        println!("add {src}->{dst} cycle: {}", graph.has_cycle());
    }
    print!("{graph}");

    let mut graph = DirectedWeightedGraph::from_edges(DIRECTED_EDGES);
    print!("{graph}");
    print_distances(&graph);
    graph.remove_edge(4, 3);
    print!("{graph}");
    print_distances(&graph);
}

fn print_distances(graph: &DirectedWeightedGraph<u32>) {
    for src in graph.get_vertices() {
        let distances = graph.dijkstra(src).iter().map(Distance::to_string).collect::<Vec<_>>();
        println!("DIJKSTRA {src} {}", distances.join(" "));
    }
}

fn undirected_tour() {
    log::info!("Undirected graph");

    let mut graph = UndirectedGraph::<String>::new();
    println!("{graph}");
    for vertex in ["A", "B", "C", "D", "E", "A"] {
        graph.add_vertex(vertex.to_string());
    }
    println!("{graph}");
    for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE", "BC", "EE"]) {
        graph.add_edge(u, v);
    }
    println!("{graph}");
    graph.remove_edge(&"A".to_string(), &"B".to_string());
    graph.remove_vertex(&"D".to_string());
    println!("{graph}");

    let graph = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE"]));
    println!("vertices: {:?}", graph.get_vertices());
    println!("edges: {:?}", graph.get_edges());

    let graph = UndirectedGraph::from_edges(pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]));
    for path in ["ABC", "ADE", "ECABDCBE", "ACDECB", "", "D", "Z"] {
        println!("{path:?} valid: {}", graph.is_valid_path(&labels(path)));
    }

    let graph = UndirectedGraph::from_edges(pairs(&UNDIRECTED_EDGES));
    for start in ["A", "B", "C", "D", "E", "G", "H"] {
        let start = start.to_string();
        println!("{start} DFS: {:?} BFS: {:?}", graph.dfs(&start, None), graph.bfs(&start, None));
    }
    for pair in ["CE", "EC", "AH"] {
        let [start, end] = [&pair[..1], &pair[1..]].map(str::to_string);
        println!("{start}-{end} DFS: {:?} BFS: {:?}", graph.dfs(&start, Some(&end)), graph.bfs(&start, Some(&end)));
    }

    let commands = [
        "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB", "remove CE", "remove DE",
        "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ", "add EG", "add QH", "remove CD", "remove BD",
        "remove QG", "add FG", "remove GE",
    ];
    let mut graph = UndirectedGraph::from_edges(pairs(&UNDIRECTED_EDGES));
    for command in commands {
        let Some((verb, edge)) = command.split_once(' ') else {
            continue;
        };
        let [u, v] = [&edge[..1], &edge[1..]].map(str::to_string);
        let outcome = if verb == "add" { graph.add_edge(u, v) } else { graph.remove_edge(&u, &v) };
        println!(
            "{command:<10} {outcome:?} components: {} cycle: {}",
            graph.count_connected_components(),
            graph.has_cycle()
        );
    }
}

fn labels(path: &str) -> Vec<String> {
    path.chars().map(String::from).collect()
}

fn pairs(edges: &[&str]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|edge| (edge[..1].to_string(), edge[1..].to_string()))
        .collect()
}
