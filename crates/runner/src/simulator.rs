use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::{GraphInput, GraphSource};
use common::types::Edge;

/// Produces a random graph for demonstration and soak testing.
///
/// Endpoints are drawn uniformly from `0..total_nodes` and weights from
/// `min_weight..=max_weight`. A configured seed makes the graph
/// reproducible; without one the generator is seeded from the OS.
pub struct SimulatorSource {
    config: SimulatorConfig,
}

impl SimulatorSource {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorSource { config }
    }
}

impl GraphSource for SimulatorSource {
    fn load(self) -> Result<GraphInput, Error> {
        let SimulatorConfig {
            total_nodes,
            edge_count,
            min_weight,
            max_weight,
            seed,
        } = self.config;

        if min_weight > max_weight {
            return Err(Error::ConfigLoadError(format!(
                "simulator min_weight {} exceeds max_weight {}",
                min_weight, max_weight
            )));
        }

        if total_nodes == 0 {
            return Ok(GraphInput::default());
        }

        let mut rng: SmallRng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let node_range = 0..total_nodes;
        let weight_range = min_weight..=max_weight;

        let edges: Vec<Edge> = (0..edge_count)
            .map(|_| {
                let from = rng.random_range(node_range.clone());
                let to = rng.random_range(node_range.clone());
                let weight = rng.random_range(weight_range.clone());

                (from, to, weight)
            })
            .collect();

        info!(total_nodes, edges = edges.len(), ?seed, "generated random graph");

        Ok(GraphInput {
            node_count: total_nodes,
            edges,
        })
    }
}
