use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_path_core::{DijkstraSolver, FloydWarshallSolver, Graph, ShortestPathSolver};

fn main() {
    let edges = generate_benchmark_edges(ALL_PAIRS_NODES);
    let graph = match Graph::from_edges(ALL_PAIRS_NODES, &edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build benchmark graph: {}", e);
            return;
        }
    };

    let start_time = Instant::now();
    let all_pairs = match black_box(FloydWarshallSolver::new(&graph).solve_all()) {
        Ok(all_pairs) => all_pairs,
        Err(e) => {
            eprintln!("Floyd-Warshall failed: {}", e);
            return;
        }
    };
    let floyd_warshall_time = start_time.elapsed();

    // Repeated Dijkstra is the usual alternative on non-negative graphs.
    let start_time = Instant::now();
    let dijkstra = DijkstraSolver::new(&graph);
    let mut mismatches = 0usize;
    for source in 0..graph.node_count() {
        match black_box(dijkstra.solve(source)) {
            Ok(paths)
                if all_pairs
                    .distances_from(source)
                    .is_ok_and(|row| row == paths.distances()) => {}
            _ => mismatches += 1,
        }
    }
    let repeated_dijkstra_time = start_time.elapsed();

    println!(
        "--- All-Pairs Benchmark Results ({} Nodes, {} Edges) ---",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Rows that disagree: {}", mismatches);
    println!("Floyd-Warshall Elapsed Time: {:?}", floyd_warshall_time);
    println!("Repeated Dijkstra Elapsed Time: {:?}", repeated_dijkstra_time);
}
