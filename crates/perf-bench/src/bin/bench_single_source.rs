use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_path_core::{BellmanFordSolver, DijkstraSolver, Graph, ShortestPathSolver};

fn main() {
    let edges = generate_benchmark_edges(SINGLE_SOURCE_NODES);
    let graph = match Graph::from_edges(SINGLE_SOURCE_NODES, &edges) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build benchmark graph: {}", e);
            return;
        }
    };

    let start_time = Instant::now();
    let dijkstra = DijkstraSolver::new(&graph).solve(0);
    let dijkstra_time = start_time.elapsed();

    let start_time = Instant::now();
    let bellman_ford = BellmanFordSolver::new(&graph).solve(0);
    let bellman_ford_time = start_time.elapsed();

    let (dijkstra, bellman_ford) = match (black_box(dijkstra), black_box(bellman_ford)) {
        (Ok(d), Ok(b)) => (d, b),
        (d, b) => {
            eprintln!("Solve failed: {:?} / {:?}", d.err(), b.err());
            return;
        }
    };

    let last = SINGLE_SOURCE_NODES - 1;
    println!(
        "--- Single-Source Benchmark Results ({} Nodes, {} Edges) ---",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Distance to node {}: {}", last, dijkstra.distance(last).unwrap_or_default());
    println!("Solvers agree: {}", dijkstra.distances() == bellman_ford.distances());
    println!("Dijkstra Elapsed Time: {:?}", dijkstra_time);
    println!("Bellman-Ford Elapsed Time: {:?}", bellman_ford_time);
}
