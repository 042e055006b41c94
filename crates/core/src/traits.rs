use super::graph::Graph;
use super::observer::{NoopObserver, ProgressObserver};
use common::error::Error;

/// Trait for shortest-path solvers bound to a single, frozen [`Graph`].
///
/// A solver holds nothing but a shared borrow of its graph. Every call to
/// [`solve`](ShortestPathSolver::solve) is a full, independent computation
/// that returns a freshly allocated result, so one solver can be reused for
/// any number of sources without earlier results being invalidated.
pub trait ShortestPathSolver {
    /// Result type produced by a successful solve.
    type Output;

    /// The graph this solver reads.
    fn graph(&self) -> &Graph;

    /// Solves from `source`, reporting progress to `observer`.
    ///
    /// Returns `Err(Error::InvalidNode)` if `source` is not a node of the
    /// graph, and `Err(Error::NegativeCycleDetected)` from solvers that
    /// detect negative cycles.
    fn solve_observed(
        &self,
        source: usize,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Self::Output, Error>;

    /// Solves from `source` without observing progress.
    fn solve(&self, source: usize) -> Result<Self::Output, Error> {
        self.solve_observed(source, &mut NoopObserver)
    }
}

pub(crate) fn check_node(graph: &Graph, node: usize) -> Result<(), Error> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(Error::InvalidNode {
            node,
            node_count: graph.node_count(),
        })
    }
}
