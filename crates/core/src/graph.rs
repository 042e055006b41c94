use common::error::Error;
use common::types::{Edge, Weight};

/// Immutable weighted directed graph in Compressed Sparse Row (CSR) format.
///
/// CSR format stores outgoing edges of each node contiguously in memory:
/// - `node_pointers[u]..node_pointers[u+1]` -> edges from node `u`
/// - `edge_targets[i]` -> target node of edge `i`
/// - `edge_weights[i]` -> weight of edge `i`
///
/// Within a node's block, edges keep the order in which they were supplied.
/// There is no mutation surface: a graph is built once and then only read, so
/// it can be shared freely between solvers and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    num_nodes: usize,
    node_pointers: Vec<usize>,
    edge_targets: Vec<usize>,
    edge_weights: Vec<Weight>,
}

impl Graph {
    /// Creates a new CSR graph from a list of edges `(src, dst, weight)`.
    ///
    /// # Arguments
    /// - `num_nodes`: total number of nodes (graph indices: 0..num_nodes-1)
    /// - `edges`: slice of `(src, dst, weight)` tuples, in insertion order
    ///
    /// # Errors
    /// Returns `Error::InvalidEdge` if any endpoint is `>= num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: &[Edge]) -> Result<Self, Error> {
        if let Some(&(from, to, _)) = edges
            .iter()
            .find(|&&(from, to, _)| from >= num_nodes || to >= num_nodes)
        {
            return Err(Error::InvalidEdge {
                from,
                to,
                node_count: num_nodes,
            });
        }

        let (node_pointers, edge_targets, edge_weights) = Self::build_csr(num_nodes, edges);

        Ok(Self {
            num_nodes,
            node_pointers,
            edge_targets,
            edge_weights,
        })
    }

    /// Two-pass counting construction of the CSR arrays.
    ///
    /// The first pass counts out-degrees and prefix-sums them into
    /// `node_pointers`. The second pass drops every edge into the next free
    /// slot of its source block. Edges are visited in input order, so the
    /// placement is stable and no sort is needed.
    fn build_csr(num_nodes: usize, edges: &[Edge]) -> (Vec<usize>, Vec<usize>, Vec<Weight>) {
        let m = edges.len();
        let mut node_pointers = vec![0; num_nodes + 1];

        for &(u, _, _) in edges {
            node_pointers[u + 1] += 1;
        }

        for i in 1..=num_nodes {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut edge_targets = vec![0; m];
        let mut edge_weights = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(u, v, weight) in edges {
            let pos = cursor[u];
            edge_targets[pos] = v;
            edge_weights[pos] = weight;
            cursor[u] += 1;
        }

        (node_pointers, edge_targets, edge_weights)
    }

    pub fn node_count(&self) -> usize {
        self.num_nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edge_targets.len()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.num_nodes
    }

    /// Outgoing `(target, weight)` pairs of `node`, in insertion order.
    ///
    /// # Errors
    /// Returns `Error::IndexOutOfRange` if `node >= node_count()`.
    pub fn neighbors(
        &self,
        node: usize,
    ) -> Result<impl ExactSizeIterator<Item = (usize, Weight)> + '_, Error> {
        if !self.contains(node) {
            return Err(Error::IndexOutOfRange {
                index: node,
                node_count: self.num_nodes,
            });
        }
        Ok(self.out_edges(node))
    }

    /// Unchecked variant of [`Graph::neighbors`] for the solver hot loops,
    /// which only ever pass indices they have already validated.
    pub(crate) fn out_edges(
        &self,
        node: usize,
    ) -> impl ExactSizeIterator<Item = (usize, Weight)> + '_ {
        let start = self.node_pointers[node];
        let end = self.node_pointers[node + 1];
        self.edge_targets[start..end]
            .iter()
            .copied()
            .zip(self.edge_weights[start..end].iter().copied())
    }

    /// Every edge as `(from, to, weight)`, grouped by source node.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_nodes).flat_map(move |u| self.out_edges(u).map(move |(v, w)| (u, v, w)))
    }

    /// True when any edge carries a negative weight. Callers use this to
    /// screen inputs before choosing Dijkstra.
    pub fn has_negative_weights(&self) -> bool {
        self.edge_weights.iter().any(|&w| w < 0)
    }

    pub fn node_pointers(&self) -> &[usize] {
        &self.node_pointers
    }

    pub fn edge_targets(&self) -> &[usize] {
        &self.edge_targets
    }

    pub fn edge_weights(&self) -> &[Weight] {
        &self.edge_weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_creates_correct_csr_for_small_graph() {
        let edges = vec![(2, 1, 9), (0, 2, 11), (0, 1, -4)];
        let graph = Graph::from_edges(3, &edges).unwrap();

        assert_eq!(graph.node_pointers(), &[0, 2, 2, 3]);
        assert_eq!(graph.edge_targets(), &[2, 1, 1]);
        assert_eq!(graph.edge_weights(), &[11, -4, 9]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn node_with_no_outgoing_edges() {
        let graph = Graph::from_edges(3, &[(0, 2, 1)]).unwrap();

        assert_eq!(graph.node_pointers(), &[0, 1, 1, 1]);
        assert_eq!(graph.neighbors(1).unwrap().count(), 0);
        assert_eq!(graph.neighbors(2).unwrap().count(), 0);
    }

    #[test]
    fn single_node_graph() {
        let graph = Graph::from_edges(1, &[]).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node_pointers(), &[0, 0]);
        assert!(graph.edge_targets().is_empty());
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::from_edges(0, &[]).unwrap();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.node_pointers(), &[0]);
        assert!(graph.neighbors(0).is_err());
    }

    #[test]
    fn neighbors_preserve_insertion_order() {
        let edges = vec![(0, 3, 3), (1, 0, 7), (0, 1, 1), (0, 2, 2), (0, 1, 5)];
        let graph = Graph::from_edges(4, &edges).unwrap();

        let out: Vec<_> = graph.neighbors(0).unwrap().collect();
        assert_eq!(out, vec![(3, 3), (1, 1), (2, 2), (1, 5)]);
    }

    #[test]
    fn neighbors_out_of_range_is_an_error() {
        let graph = Graph::from_edges(2, &[(0, 1, 1)]).unwrap();

        let err = graph.neighbors(2).err().unwrap();
        assert_eq!(
            err,
            Error::IndexOutOfRange {
                index: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn edge_with_out_of_range_endpoint_is_rejected() {
        let result = Graph::from_edges(2, &[(0, 1, 1), (1, 2, 1)]);

        assert_eq!(
            result.err(),
            Some(Error::InvalidEdge {
                from: 1,
                to: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn edges_iterates_grouped_by_source() {
        let edges = vec![(2, 0, 1), (0, 1, 2), (1, 2, 3)];
        let graph = Graph::from_edges(3, &edges).unwrap();

        let collected: Vec<Edge> = graph.edges().collect();
        assert_eq!(collected, vec![(0, 1, 2), (1, 2, 3), (2, 0, 1)]);
    }

    #[test]
    fn detects_negative_weights() {
        let positive = Graph::from_edges(2, &[(0, 1, 0), (1, 0, 4)]).unwrap();
        let negative = Graph::from_edges(2, &[(0, 1, 0), (1, 0, -4)]).unwrap();

        assert!(!positive.has_negative_weights());
        assert!(negative.has_negative_weights());
    }

    #[test]
    fn handles_large_graphs() {
        let edges: Vec<Edge> = (0..1000).map(|i| (i, (i + 1) % 1000, 1)).collect();
        let graph = Graph::from_edges(1000, &edges).unwrap();

        assert_eq!(graph.node_count(), 1000);
        assert_eq!(graph.edge_count(), 1000);
        assert_eq!(graph.neighbors(999).unwrap().collect::<Vec<_>>(), vec![(0, 1)]);
    }
}
