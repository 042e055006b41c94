use super::graph::Graph;
use super::matrix::Matrix;
use super::observer::{NoopObserver, Progress, ProgressObserver};
use super::paths::AllPairsPaths;
use super::traits::{ShortestPathSolver, check_node};
use common::error::Error;
use common::numeric_kernel::add_distances;
use common::types::{Distance, NEG_INFINITY, UNREACHABLE};
use tracing::{debug, warn};

/// Solver implementing the Floyd-Warshall dynamic program for all-pairs
/// shortest paths.
///
/// Owns two V x V matrices per solve: distances and next hops. Negative edge
/// weights are supported; a negative cycle anywhere in the graph fails the
/// solve with `Error::NegativeCycleDetected`.
#[derive(Debug, Clone, Copy)]
pub struct FloydWarshallSolver<'g> {
    graph: &'g Graph,
}

impl<'g> FloydWarshallSolver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Solves all pairs without a designated source.
    pub fn solve_all(&self) -> Result<AllPairsPaths, Error> {
        self.solve_all_observed(&mut NoopObserver)
    }

    /// Solves all pairs, reporting the distance matrix to `observer` after
    /// each intermediate node.
    pub fn solve_all_observed(
        &self,
        observer: &mut dyn ProgressObserver,
    ) -> Result<AllPairsPaths, Error> {
        let (mut distance, mut next) = self.initial_matrices();
        let n = distance.size();

        for k in 0..n {
            for i in 0..n {
                let d_ik = distance[(i, k)];
                if d_ik == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let Some(through_k) = add_distances(d_ik, distance[(k, j)]) else {
                        continue;
                    };
                    if through_k < distance[(i, j)] {
                        distance[(i, j)] = through_k;
                        next[(i, j)] = next[(i, k)];
                    }
                }
            }

            observer.observe(Progress::IntermediateCompleted {
                intermediate: k,
                distances: &distance,
            });
        }

        let affected = Self::propagate_negative_cycles(&mut distance);
        if !affected.is_empty() {
            warn!(?affected, "negative cycle found by all-pairs sweep");
            return Err(Error::NegativeCycleDetected { affected });
        }

        debug!(nodes = n, "floyd-warshall solve complete");

        Ok(AllPairsPaths::new(distance, next))
    }

    /// Distance matrix before any intermediate node is considered.
    pub fn initial_distances(&self) -> Matrix<Distance> {
        self.initial_matrices().0
    }

    /// Builds the starting distance and next-hop matrices.
    ///
    /// The diagonal starts at 0. A direct edge `i -> j` sets `d[i][j]` to its
    /// weight; among parallel edges the lightest one is kept, and a self-loop
    /// only replaces the 0 on the diagonal when it is negative.
    fn initial_matrices(&self) -> (Matrix<Distance>, Matrix<Option<usize>>) {
        let n = self.graph.node_count();
        let mut distance = Matrix::filled(n, UNREACHABLE);
        let mut next = Matrix::filled(n, None);

        for i in 0..n {
            distance[(i, i)] = 0;
            next[(i, i)] = Some(i);
        }

        for (i, j, weight) in self.graph.edges() {
            let weight = Distance::from(weight);
            if weight < distance[(i, j)] {
                distance[(i, j)] = weight;
                next[(i, j)] = Some(j);
            }
        }

        (distance, next)
    }

    /// Marks every pair whose distance is unbounded below.
    ///
    /// After the main sweep, `d[k][k] < 0` exactly when `k` lies on a
    /// negative cycle, and a non-`UNREACHABLE` cell means reachability. Any
    /// pair `(i, j)` with `i` reaching such a `k` and `k` reaching `j` can be
    /// made arbitrarily short, so it becomes [`NEG_INFINITY`]. One pass over
    /// every negative diagonal cell is therefore the full fixed point.
    ///
    /// Returns, in ascending order, every column with a marked cell.
    fn propagate_negative_cycles(distance: &mut Matrix<Distance>) -> Vec<usize> {
        let n = distance.size();
        let on_cycle: Vec<usize> = (0..n).filter(|&k| distance[(k, k)] < 0).collect();
        if on_cycle.is_empty() {
            return Vec::new();
        }

        let mut column_marked = vec![false; n];

        for &k in &on_cycle {
            for i in 0..n {
                if distance[(i, k)] == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    if distance[(k, j)] != UNREACHABLE {
                        distance[(i, j)] = NEG_INFINITY;
                        column_marked[j] = true;
                    }
                }
            }
        }

        column_marked
            .iter()
            .enumerate()
            .filter_map(|(node, &marked)| marked.then_some(node))
            .collect()
    }
}

impl ShortestPathSolver for FloydWarshallSolver<'_> {
    type Output = AllPairsPaths;

    fn graph(&self) -> &Graph {
        self.graph
    }

    /// Validates `source` and solves all pairs; the row for `source` is
    /// available through [`AllPairsPaths::distances_from`].
    fn solve_observed(
        &self,
        source: usize,
        observer: &mut dyn ProgressObserver,
    ) -> Result<AllPairsPaths, Error> {
        check_node(self.graph, source)?;
        self.solve_all_observed(observer)
    }
}
