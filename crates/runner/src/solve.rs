use std::io::Write;
use tracing::{debug, info};

use super::config::SolveConfig;
use super::error::Error;
use super::report::{TraceObserver, write_all_pairs, write_single_source};
use super::types::Algorithm;
use shortest_path_core::{
    BellmanFordSolver, DijkstraSolver, FloydWarshallSolver, Graph, NoopObserver,
    ProgressObserver, ShortestPathSolver,
};

/// Runs the configured algorithm on `graph` and writes the report to `out`.
///
/// Dijkstra is refused up front when the graph has any negative weight.
pub fn run_solve<W: Write>(graph: &Graph, config: &SolveConfig, out: &mut W) -> Result<(), Error> {
    if config.algorithm == Algorithm::Dijkstra && graph.has_negative_weights() {
        return Err(Error::NegativeWeightsUnsupported);
    }

    info!(
        algorithm = ?config.algorithm,
        source = config.source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "starting solve"
    );

    let mut trace = config.trace.then(|| TraceObserver::new(Vec::new()));
    if config.algorithm == Algorithm::FloydWarshall {
        if let Some(trace) = trace.as_mut() {
            trace.write_initial_matrix(&FloydWarshallSolver::new(graph).initial_distances());
        }
    }
    let mut noop = NoopObserver;
    let observer: &mut dyn ProgressObserver = match trace.as_mut() {
        Some(trace) => trace,
        None => &mut noop,
    };

    let outcome = match config.algorithm {
        Algorithm::Dijkstra => {
            solve_with(DijkstraSolver::new(graph), config.source, observer).map(Report::SingleSource)
        }
        Algorithm::BellmanFord => {
            solve_with(BellmanFordSolver::new(graph), config.source, observer)
                .map(Report::SingleSource)
        }
        Algorithm::FloydWarshall => {
            solve_with(FloydWarshallSolver::new(graph), config.source, observer)
                .map(Report::AllPairs)
        }
    };

    // The trace is written even when the solve fails.
    if let Some(trace) = trace {
        out.write_all(&trace.finish()?)?;
    }

    match outcome? {
        Report::SingleSource(paths) => write_single_source(out, &paths)?,
        Report::AllPairs(paths) => write_all_pairs(out, &paths)?,
    }

    info!("solve complete");
    Ok(())
}

fn solve_with<S: ShortestPathSolver>(
    solver: S,
    source: usize,
    observer: &mut dyn ProgressObserver,
) -> Result<S::Output, Error> {
    debug!(
        source,
        nodes = solver.graph().node_count(),
        solver = std::any::type_name::<S>(),
        "running solver"
    );
    Ok(solver.solve_observed(source, observer)?)
}

enum Report {
    SingleSource(shortest_path_core::ShortestPaths),
    AllPairs(shortest_path_core::AllPairsPaths),
}
