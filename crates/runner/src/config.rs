use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::types::Algorithm;
use common::types::Weight;

#[derive(Debug, Deserialize, Clone)]
pub struct SolveConfig {
    pub algorithm: Algorithm,
    pub source: usize,
    pub trace: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_nodes: usize,
    pub edge_count: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<tracing::Level, Error> {
        self.level
            .parse()
            .map_err(|_| Error::ConfigLoadError(format!("Unknown log level '{}'", self.level)))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub solve: SolveConfig,
    pub simulator: SimulatorConfig,
    pub logging: LoggingConfig,
}

/// Loads configuration from built-in defaults, `crates/runner/Config.toml`
/// (when present) and `RUNNER_`-prefixed environment variables, in that
/// order of precedence.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path.join("crates").join("runner").join("Config.toml");

    load_config_from(&config_file_path)
}

/// Same as [`load_config`] with an explicit file path. A missing file is not
/// an error; the defaults apply.
pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    let s = ConfigLoader::builder()
        .set_default("solve.algorithm", "dijkstra")
        .and_then(|b| b.set_default("solve.source", 0_i64))
        .and_then(|b| b.set_default("solve.trace", false))
        .and_then(|b| b.set_default("simulator.total_nodes", 10_i64))
        .and_then(|b| b.set_default("simulator.edge_count", 30_i64))
        .and_then(|b| b.set_default("simulator.min_weight", 0_i64))
        .and_then(|b| b.set_default("simulator.max_weight", 10_i64))
        .and_then(|b| b.set_default("logging.level", "info"))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(File::from(config_file_path).required(false))
        .add_source(
            Environment::with_prefix("RUNNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_temp_file() -> NamedTempFile {
        tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file")
    }

    #[test]
    fn test_defaults_apply_without_file() {
        let config = load_config_from(Path::new("does/not/exist/Config.toml")).unwrap();

        assert_eq!(config.solve.algorithm, Algorithm::Dijkstra);
        assert_eq!(config.solve.source, 0);
        assert!(!config.solve.trace);
        assert_eq!(config.simulator.seed, None);
        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(
                b"[solve]\nalgorithm = \"floyd-warshall\"\nsource = 2\ntrace = true\n\n\
                  [simulator]\nseed = 42\nmax_weight = 3\n",
            )
            .expect("Failed to write config");

        let config = load_config_from(temp_file.path()).unwrap();

        assert_eq!(config.solve.algorithm, Algorithm::FloydWarshall);
        assert_eq!(config.solve.source, 2);
        assert!(config.solve.trace);
        assert_eq!(config.simulator.seed, Some(42));
        assert_eq!(config.simulator.max_weight, 3);
        assert_eq!(config.simulator.total_nodes, 10);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(b"[solve]\nalgorithm = \"a-star\"\n")
            .expect("Failed to write config");

        let result = load_config_from(temp_file.path());

        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };

        assert!(logging.max_level().is_err());
    }
}
