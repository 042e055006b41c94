use std::io::Read;
use tracing::info;

use super::error::Error;
use super::types::{GraphInput, GraphSource};
use common::types::Weight;

/// Reads a whitespace-separated graph description:
///
/// ```text
/// <node count> <edge count>
/// <from> <to> <weight>   (edge count times)
/// ```
///
/// Line breaks carry no meaning; anything after the last edge is ignored.
pub struct TokenLoader<R> {
    reader: R,
}

impl<R: Read> TokenLoader<R> {
    pub fn new(reader: R) -> Self {
        TokenLoader { reader }
    }
}

fn next_value<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, Error> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::ParseError(format!("unexpected end of input, expected {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::ParseError(format!("expected {}, found '{}'", what, token)))
}

impl<R: Read> GraphSource for TokenLoader<R> {
    fn load(mut self) -> Result<GraphInput, Error> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let node_count: usize = next_value(&mut tokens, "node count")?;
        let edge_count: usize = next_value(&mut tokens, "edge count")?;

        let mut edges = Vec::with_capacity(edge_count);
        for _ in 0..edge_count {
            let from: usize = next_value(&mut tokens, "edge source")?;
            let to: usize = next_value(&mut tokens, "edge target")?;
            let weight: Weight = next_value(&mut tokens, "edge weight")?;
            edges.push((from, to, weight));
        }

        info!(node_count, edges = edges.len(), "read graph from token stream");

        Ok(GraphInput { node_count, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_counts_and_edges() {
        let input = "3 4\n0 1 1\n1 2 2\n0 2 4\n2 0 3\n";

        let graph = TokenLoader::new(input.as_bytes()).load().unwrap();

        assert_eq!(graph.node_count, 3);
        assert_eq!(graph.edges, vec![(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 0, 3)]);
    }

    #[test]
    fn test_layout_is_free_form() {
        let input = "2 1 0\n1\n-7 trailing tokens";

        let graph = TokenLoader::new(input.as_bytes()).load().unwrap();

        assert_eq!(graph.edges, vec![(0, 1, -7)]);
    }

    #[test]
    fn test_truncated_input_is_parse_error() {
        let result = TokenLoader::new("3 2\n0 1 5\n1".as_bytes()).load();

        match result {
            Err(Error::ParseError(message)) => assert!(message.contains("edge target")),
            other => panic!("Expected ParseError, got: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_token_is_parse_error() {
        let result = TokenLoader::new("three 2".as_bytes()).load();

        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
