// ----------------------------
// Benchmark graphs
// ----------------------------

use common::types::{Edge, Weight};

/// Nodes in the single-source benchmark graph.
pub const SINGLE_SOURCE_NODES: usize = 20_000;
/// Nodes in the all-pairs benchmark graph. Floyd–Warshall is cubic.
pub const ALL_PAIRS_NODES: usize = 300;
/// Out-degree of every node that is not near the end of the chain.
pub const FAN_OUT: usize = 6;

/// Generates a connected graph where node `i` points at the next
/// [`FAN_OUT`] nodes, with weights in `1..=97`.
///
/// The weights are a fixed function of the endpoints so every run solves
/// the same graph and results stay comparable across solvers.
pub fn generate_benchmark_edges(node_count: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(node_count * FAN_OUT);
    for from in 0..node_count {
        for step in 1..=FAN_OUT {
            let to = from + step;
            if to >= node_count {
                break;
            }
            edges.push((from, to, benchmark_weight(from, to)));
        }
    }
    edges
}

fn benchmark_weight(from: usize, to: usize) -> Weight {
    ((from * 31 + to * 17) % 97 + 1) as Weight
}
