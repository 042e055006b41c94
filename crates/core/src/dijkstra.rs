use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::Graph;
use super::observer::{Progress, ProgressObserver};
use super::paths::ShortestPaths;
use super::traits::{ShortestPathSolver, check_node};
use common::error::Error;
use common::numeric_kernel::extend;
use common::types::{Distance, UNREACHABLE};
use tracing::debug;

/// Solver implementing Dijkstra's label-setting algorithm with a binary-heap
/// frontier.
///
/// Correct only when no edge reachable from the source has a negative
/// weight. That precondition is not checked: screen the graph with
/// [`Graph::has_negative_weights`] and use Bellman-Ford or Floyd-Warshall
/// instead when it fails. The solve still terminates on such input, because
/// every node is finalized at most once, but the distances are meaningless.
#[derive(Debug, Clone, Copy)]
pub struct DijkstraSolver<'g> {
    graph: &'g Graph,
}

impl<'g> DijkstraSolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }
}

impl ShortestPathSolver for DijkstraSolver<'_> {
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
        let mut visited = vec![false; num_nodes];

        // Min-heap on (distance, node); ties resolve to the lower node index.
        let mut frontier: BinaryHeap<Reverse<(Distance, usize)>> = BinaryHeap::new();

        distance[source] = 0;
        predecessor[source] = Some(source);
        frontier.push(Reverse((0, source)));

        let mut iteration = 0;

        while let Some(Reverse((current_distance, u))) = frontier.pop() {
            // Stale entry left behind by a later, shorter relaxation.
            if visited[u] {
                continue;
            }
            visited[u] = true;

            observer.observe(Progress::NodeFinalized {
                iteration,
                node: u,
                distances: &distance,
            });
            iteration += 1;

            for (v, weight) in self.graph.out_edges(u) {
                if visited[v] {
                    continue;
                }
                let Some(candidate) = extend(current_distance, weight) else {
                    continue;
                };
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        debug!(source, finalized = iteration, "dijkstra solve complete");

        Ok(ShortestPaths::new(source, distance, predecessor))
    }
}

#[cfg(test)]
mod dijkstra_tests {
    use super::*;
    use common::types::Edge;

    fn build_graph(edges: &[Edge], num_nodes: usize) -> Graph {
        Graph::from_edges(num_nodes, edges).unwrap()
    }

    #[test]
    fn three_node_graph() {
        let graph = build_graph(&[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 0, 3)], 3);

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.distances(), &[0, 1, 3]);
        assert_eq!(paths.path(0, 2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn five_node_graph() {
        let graph = build_graph(
            &[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 0, 3), (1, 3, 5), (3, 4, 6)],
            5,
        );

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.distances(), &[0, 1, 3, 6, 12]);
        assert_eq!(paths.path(0, 4).unwrap(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn unreachable_nodes_keep_sentinel_and_empty_path() {
        let graph = build_graph(&[(0, 1, 5), (2, 0, 1)], 3);

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.distances(), &[0, 5, UNREACHABLE]);
        assert!(paths.path(0, 2).unwrap().is_empty());
    }

    #[test]
    fn source_out_of_range_is_invalid_node() {
        let graph = build_graph(&[(0, 1, 1)], 2);

        let result = DijkstraSolver::new(&graph).solve(2);

        assert_eq!(
            result,
            Err(Error::InvalidNode {
                node: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn empty_graph_has_no_valid_source() {
        let graph = build_graph(&[], 0);

        assert!(DijkstraSolver::new(&graph).solve(0).is_err());
    }

    #[test]
    fn parallel_edges_use_the_lightest() {
        let graph = build_graph(&[(0, 1, 9), (0, 1, 2), (0, 1, 5)], 2);

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.distances(), &[0, 2]);
    }

    #[test]
    fn observer_sees_every_finalized_node_once() {
        let graph = build_graph(&[(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 0, 3)], 3);
        let mut order = Vec::new();

        let mut observer = |progress: Progress<'_>| {
            if let Progress::NodeFinalized {
                iteration, node, ..
            } = progress
            {
                order.push((iteration, node));
            }
        };
        DijkstraSolver::new(&graph)
            .solve_observed(0, &mut observer)
            .unwrap();

        assert_eq!(order, vec![(0, 0), (1, 1), (2, 2)]);
    }

    /// Negative weights break the precondition, but the solve must still
    /// terminate, even with a negative cycle reachable from the source.
    #[test]
    fn terminates_on_negative_cycle() {
        let graph = build_graph(
            &[(0, 1, 3), (1, 2, -2), (0, 2, 2), (2, 0, -4), (1, 3, 5), (3, 4, -2)],
            5,
        );

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.node_count(), 5);
    }

    #[test]
    fn large_linear_graph() {
        let n = 1000;
        let edges: Vec<Edge> = (0..n - 1).map(|i| (i, i + 1, 1)).collect();
        let graph = build_graph(&edges, n);

        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();

        assert_eq!(paths.distance(n - 1).unwrap(), (n - 1) as Distance);
        assert_eq!(paths.path_to(n - 1).unwrap().len(), n);
    }
}
