use serde::Deserialize;

use super::error::Error;
use common::types::Edge;
use shortest_path_core::Graph;

/// A trait defining the contract for anything that can supply the finished
/// graph description the solvers consume.
///
/// This decouples the runner from where the graph comes from (standard
/// input, a CSV file, or the random simulator).
pub trait GraphSource {
    fn load(self) -> Result<GraphInput, Error>;
}

/// Node count plus edges in insertion order, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphInput {
    pub node_count: usize,
    pub edges: Vec<Edge>,
}

impl GraphInput {
    pub fn into_graph(self) -> Result<Graph, Error> {
        Ok(Graph::from_edges(self.node_count, &self.edges)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    STDIN,
    CSV(String),
    SIM,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_graph_rejects_out_of_range_edges() {
        let input = GraphInput {
            node_count: 2,
            edges: vec![(0, 3, 1)],
        };

        assert!(matches!(input.into_graph(), Err(Error::GraphError(_))));
    }

    #[test]
    fn into_graph_keeps_node_count() {
        let input = GraphInput {
            node_count: 4,
            edges: vec![(0, 1, 1)],
        };

        let graph = input.into_graph().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
    }
}
