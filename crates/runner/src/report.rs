use std::io::{self, Write};

use common::types::{Distance, UNREACHABLE, is_finite};
use shortest_path_core::{AllPairsPaths, Matrix, Progress, ProgressObserver, ShortestPaths};

pub fn format_distance(distance: Distance) -> String {
    if is_finite(distance) {
        distance.to_string()
    } else if distance == UNREACHABLE {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

/// Renders a distance list as `[0, 4, ∞]`.
pub fn format_distance_list(distances: &[Distance]) -> String {
    let cells: Vec<String> = distances.iter().map(|&d| format_distance(d)).collect();
    format!("[{}]", cells.join(", "))
}

fn format_path(path: &[usize]) -> String {
    let cells: Vec<String> = path.iter().map(usize::to_string).collect();
    format!("[{}]", cells.join(", "))
}

fn write_matrix<W: Write>(out: &mut W, matrix: &Matrix<Distance>) -> io::Result<()> {
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|&d| format_distance(d)).collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

/// Human-readable iteration trace, written as the solver reports progress.
///
/// `observe` cannot return an error, so the first write failure is kept and
/// every later snapshot is dropped; [`TraceObserver::finish`] surfaces it.
pub struct TraceObserver<W: Write> {
    out: W,
    header_written: bool,
    failure: Option<io::Error>,
}

impl<W: Write> TraceObserver<W> {
    pub fn new(out: W) -> Self {
        TraceObserver {
            out,
            header_written: false,
            failure: None,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    /// Writes the Floyd-Warshall starting matrix ahead of the per-node blocks.
    pub fn write_initial_matrix(&mut self, distances: &Matrix<Distance>) {
        if self.failure.is_some() {
            return;
        }
        let written = writeln!(self.out, "Initial distance matrix:")
            .and_then(|()| write_matrix(&mut self.out, distances));
        if let Err(e) = written {
            self.failure = Some(e);
        }
    }

    fn write_progress(&mut self, progress: Progress<'_>) -> io::Result<()> {
        match progress {
            Progress::NodeFinalized {
                iteration,
                node,
                distances,
            } => {
                if !self.header_written {
                    writeln!(self.out, "Iteration\tVisited\tDistance List")?;
                }
                writeln!(
                    self.out,
                    "{}\t\t{}\t\t{}",
                    iteration,
                    node,
                    format_distance_list(distances)
                )
            }
            Progress::PassCompleted { pass, distances } => {
                if !self.header_written {
                    writeln!(self.out, "Iteration\tDistance List")?;
                }
                writeln!(self.out, "{}\t\t{}", pass, format_distance_list(distances))
            }
            Progress::IntermediateCompleted {
                intermediate,
                distances,
            } => {
                writeln!(
                    self.out,
                    "After considering intermediate node {}:",
                    intermediate
                )?;
                write_matrix(&mut self.out, distances)
            }
        }
    }
}

impl<W: Write> ProgressObserver for TraceObserver<W> {
    fn observe(&mut self, progress: Progress<'_>) {
        if self.failure.is_some() {
            return;
        }
        match self.write_progress(progress) {
            Ok(()) => self.header_written = true,
            Err(e) => self.failure = Some(e),
        }
    }
}

/// Prints every node's distance from the source and the path to it.
pub fn write_single_source<W: Write>(out: &mut W, paths: &ShortestPaths) -> io::Result<()> {
    let source = paths.source();
    writeln!(out, "Shortest distances from node {}:", source)?;
    for (node, &distance) in paths.distances().iter().enumerate() {
        let shown = if distance == UNREACHABLE {
            "Unreachable".to_string()
        } else {
            format_distance(distance)
        };
        writeln!(out, "Node {}: {}", node, shown)?;
    }

    for node in 0..paths.node_count() {
        let path = paths.path(source, node).unwrap_or_default();
        writeln!(out, "path to node {}: {}", node, format_path(&path))?;
    }
    Ok(())
}

/// Prints the final distance matrix and the path between every ordered pair.
pub fn write_all_pairs<W: Write>(out: &mut W, paths: &AllPairsPaths) -> io::Result<()> {
    writeln!(out, "All-pairs distance matrix:")?;
    write_matrix(out, paths.distances())?;

    let n = paths.node_count();
    for i in 0..n {
        for j in 0..n {
            let path = paths.path(i, j).unwrap_or_default();
            writeln!(out, "from {} to {}\t{}", i, j, format_path(&path))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::NEG_INFINITY;
    use shortest_path_core::{
        BellmanFordSolver, DijkstraSolver, FloydWarshallSolver, Graph, ShortestPathSolver,
    };

    fn sample_graph() -> Graph {
        Graph::from_edges(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 4)]).unwrap()
    }

    #[test]
    fn test_sentinels_render_as_infinity() {
        assert_eq!(format_distance(UNREACHABLE), "∞");
        assert_eq!(format_distance(NEG_INFINITY), "-∞");
        assert_eq!(format_distance(-3), "-3");
        assert_eq!(format_distance_list(&[0, UNREACHABLE, 5]), "[0, ∞, 5]");
    }

    #[test]
    fn test_dijkstra_trace_rows() {
        let graph = sample_graph();
        let mut trace = TraceObserver::new(Vec::new());

        DijkstraSolver::new(&graph)
            .solve_observed(0, &mut trace)
            .unwrap();
        let text = String::from_utf8(trace.finish().unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Iteration\tVisited\tDistance List");
        assert_eq!(lines[1], "0\t\t0\t\t[0, ∞, ∞]");
        assert_eq!(lines[2], "1\t\t1\t\t[0, 1, 4]");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_bellman_ford_trace_rows() {
        let graph = sample_graph();
        let mut trace = TraceObserver::new(Vec::new());

        BellmanFordSolver::new(&graph)
            .solve_observed(0, &mut trace)
            .unwrap();
        let text = String::from_utf8(trace.finish().unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Iteration\tDistance List");
        assert_eq!(lines[1], "1\t\t[0, 1, 3]");
    }

    #[test]
    fn test_floyd_warshall_trace_blocks() {
        let graph = sample_graph();
        let mut trace = TraceObserver::new(Vec::new());

        FloydWarshallSolver::new(&graph)
            .solve_all_observed(&mut trace)
            .unwrap();
        let text = String::from_utf8(trace.finish().unwrap()).unwrap();

        assert_eq!(text.matches("After considering intermediate node").count(), 3);
        assert!(text.contains("0\t1\t3\n"));
    }

    #[test]
    fn test_initial_matrix_precedes_intermediate_blocks() {
        let graph = sample_graph();
        let solver = FloydWarshallSolver::new(&graph);
        let mut trace = TraceObserver::new(Vec::new());

        trace.write_initial_matrix(&solver.initial_distances());
        solver.solve_all_observed(&mut trace).unwrap();
        let text = String::from_utf8(trace.finish().unwrap()).unwrap();

        assert!(text.starts_with("Initial distance matrix:\n0\t1\t4\n∞\t0\t2\n∞\t∞\t0\n"));
        assert!(text.find("Initial").unwrap() < text.find("After considering").unwrap());
    }

    #[test]
    fn test_single_source_report() {
        let graph = Graph::from_edges(3, &[(0, 1, 1)]).unwrap();
        let paths = DijkstraSolver::new(&graph).solve(0).unwrap();
        let mut out = Vec::new();

        write_single_source(&mut out, &paths).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Node 1: 1\n"));
        assert!(text.contains("Node 2: Unreachable\n"));
        assert!(text.contains("path to node 1: [0, 1]\n"));
        assert!(text.contains("path to node 2: []\n"));
    }

    #[test]
    fn test_all_pairs_report() {
        let graph = sample_graph();
        let paths = FloydWarshallSolver::new(&graph).solve_all().unwrap();
        let mut out = Vec::new();

        write_all_pairs(&mut out, &paths).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("from 0 to 2\t[0, 1, 2]\n"));
        assert!(text.contains("from 2 to 0\t[]\n"));
        assert_eq!(text.matches("from ").count(), 9);
    }
}
