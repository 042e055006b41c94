use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A solver or path query was given a node outside `[0, node_count)`.
    #[error("Node {node} is not a valid node index (graph has {node_count} nodes).")]
    InvalidNode { node: usize, node_count: usize },

    /// A graph accessor was given a node outside `[0, node_count)`.
    #[error("Index {index} is out of range for a graph with {node_count} nodes.")]
    IndexOutOfRange { index: usize, node_count: usize },

    /// An input edge references an endpoint the graph does not have.
    #[error("Edge ({from} -> {to}) references a node outside a graph with {node_count} nodes.")]
    InvalidEdge {
        from: usize,
        to: usize,
        node_count: usize,
    },

    /// A cycle with strictly negative total weight makes shortest distances
    /// unbounded. `affected` lists, in ascending order, every node whose
    /// distance became unbounded.
    #[error("Graph contains a negative weight cycle affecting nodes {affected:?}.")]
    NegativeCycleDetected { affected: Vec<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cycle_message_lists_affected_nodes() {
        let err = Error::NegativeCycleDetected {
            affected: vec![0, 2],
        };
        assert_eq!(
            err.to_string(),
            "Graph contains a negative weight cycle affecting nodes [0, 2]."
        );
    }

    #[test]
    fn invalid_node_message_includes_bounds() {
        let err = Error::InvalidNode {
            node: 7,
            node_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Node 7 is not a valid node index (graph has 3 nodes)."
        );
    }
}
