use super::matrix::Matrix;
use common::types::Distance;

/// A snapshot handed to a [`ProgressObserver`] at a well-defined point of a
/// solve. The borrowed distances are the solver's live state at that moment;
/// observers may copy them but cannot change them.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Dijkstra finalized `node`. `iteration` counts finalized nodes from 0.
    /// `distances` is taken before the node's outgoing edges are relaxed.
    NodeFinalized {
        iteration: usize,
        node: usize,
        distances: &'a [Distance],
    },

    /// Bellman-Ford finished relaxation pass `pass` (1-based).
    PassCompleted {
        pass: usize,
        distances: &'a [Distance],
    },

    /// Floyd-Warshall finished the sweep through intermediate node
    /// `intermediate`.
    IntermediateCompleted {
        intermediate: usize,
        distances: &'a Matrix<Distance>,
    },
}

/// Receives progress snapshots during a solve.
///
/// Any `FnMut(Progress<'_>)` closure is an observer, so callers rarely need
/// to implement this by hand.
pub trait ProgressObserver {
    fn observe(&mut self, progress: Progress<'_>);
}

impl<F> ProgressObserver for F
where
    F: FnMut(Progress<'_>),
{
    fn observe(&mut self, progress: Progress<'_>) {
        self(progress)
    }
}

/// Observer that ignores every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn observe(&mut self, _progress: Progress<'_>) {}
}
