use thiserror::Error;

use common::error::Error as ShortestPathError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed graph input: {0}")]
    ParseError(String),

    #[error("There is a negative edge weight; Dijkstra may fail. Use bellman-ford or floyd-warshall.")]
    NegativeWeightsUnsupported,

    #[error("Graph processing error: {0}")]
    GraphError(#[from] ShortestPathError),
}
