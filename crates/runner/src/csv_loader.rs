use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tracing::{error, info};

use super::error::Error;
use super::types::{GraphInput, GraphSource};
use common::types::{Edge, Weight};

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight: Weight,
}

/// Reads an edge list from a CSV file with a `from,to,weight` header.
/// Extra columns are ignored. The node count is one past the largest
/// endpoint seen.
pub struct CsvLoader {
    path: String,
}

impl CsvLoader {
    pub fn new(path: String) -> Self {
        CsvLoader { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path, "failed to read file: {:?}", e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight));
        }
        Ok(edges)
    }
}

impl GraphSource for CsvLoader {
    fn load(self) -> Result<GraphInput, Error> {
        let edges = self.parse_csv_to_edges()?;

        let node_count = edges
            .iter()
            .flat_map(|&(u, v, _)| [u, v])
            .max()
            .map_or(0, |max_id| max_id + 1);

        info!(path = %self.path, node_count, edges = edges.len(), "loaded CSV graph");

        Ok(GraphInput { node_count, edges })
    }
}
