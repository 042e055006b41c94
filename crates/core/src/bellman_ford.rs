use std::collections::VecDeque;

use super::graph::Graph;
use super::observer::{Progress, ProgressObserver};
use super::paths::ShortestPaths;
use super::traits::{ShortestPathSolver, check_node};
use common::error::Error;
use common::numeric_kernel::extend;
use common::types::{Distance, NEG_INFINITY, UNREACHABLE};
use tracing::{debug, warn};

/// Solver implementing the Bellman-Ford label-correcting algorithm for
/// single-source shortest paths and negative cycle detection.
///
/// Negative edge weights are supported. A negative cycle reachable from the
/// source fails the solve with `Error::NegativeCycleDetected`; cycles the
/// source cannot reach do not affect the result.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFordSolver<'g> {
    graph: &'g Graph,
}

impl<'g> BellmanFordSolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Runs one relaxation pass over every edge of every node.
    ///
    /// Returns true if any distance improved.
    fn relax_all(&self, distance: &mut [Distance], predecessor: &mut [Option<usize>]) -> bool {
        let mut updated = false;

        for u in 0..self.graph.node_count() {
            for (v, weight) in self.graph.out_edges(u) {
                let Some(candidate) = extend(distance[u], weight) else {
                    continue;
                };
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                    updated = true;
                }
            }
        }

        updated
    }

    /// Marks every node whose distance is unbounded below.
    ///
    /// Edges that are still relaxable after the bounded passes point at nodes
    /// influenced by a negative cycle. Those targets seed a breadth-first
    /// traversal, and everything reachable from them is marked with
    /// [`NEG_INFINITY`], not just the direct targets.
    ///
    /// A node already clamped to [`NEG_INFINITY`] is a seed as well. No
    /// simple path sums that low, and once a whole cycle is clamped none of
    /// its edges is relaxable any more.
    ///
    /// Returns the marked nodes in ascending order.
    fn propagate_negative_cycles(&self, distance: &mut [Distance]) -> Vec<usize> {
        let num_nodes = self.graph.node_count();
        let mut marked = vec![false; num_nodes];
        let mut queue = VecDeque::new();

        for u in 0..num_nodes {
            if distance[u] == NEG_INFINITY && !marked[u] {
                marked[u] = true;
                queue.push_back(u);
            }
            for (v, weight) in self.graph.out_edges(u) {
                let relaxable = extend(distance[u], weight).is_some_and(|c| c < distance[v]);
                if relaxable && !marked[v] {
                    marked[v] = true;
                    queue.push_back(v);
                }
            }
        }

        while let Some(u) = queue.pop_front() {
            distance[u] = NEG_INFINITY;
            for (v, _) in self.graph.out_edges(u) {
                if !marked[v] {
                    marked[v] = true;
                    queue.push_back(v);
                }
            }
        }

        marked
            .iter()
            .enumerate()
            .filter_map(|(node, &is_marked)| is_marked.then_some(node))
            .collect()
    }
}

impl ShortestPathSolver for BellmanFordSolver<'_> {
    type Output = ShortestPaths;

    fn graph(&self) -> &Graph {
        self.graph
    }

    fn solve_observed(
        &self,
        source: usize,
        observer: &mut dyn ProgressObserver,
    ) -> Result<ShortestPaths, Error> {
        check_node(self.graph, source)?;

        let num_nodes = self.graph.node_count();
        let mut distance = vec![UNREACHABLE; num_nodes];
        let mut predecessor = vec![None; num_nodes];

        distance[source] = 0;
        predecessor[source] = Some(source);

        let mut passes = 0;
        for pass in 1..num_nodes {
            let updated = self.relax_all(&mut distance, &mut predecessor);
            passes = pass;

            observer.observe(Progress::PassCompleted {
                pass,
                distances: &distance,
            });

            if !updated {
                debug!(source, pass, "bellman-ford reached a fixed point early");
                break;
            }
        }

        let affected = self.propagate_negative_cycles(&mut distance);
        if !affected.is_empty() {
            warn!(source, ?affected, "negative cycle reachable from source");
            return Err(Error::NegativeCycleDetected { affected });
        }

        debug!(source, passes, "bellman-ford solve complete");

        Ok(ShortestPaths::new(source, distance, predecessor))
    }
}
