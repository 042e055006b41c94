pub mod config;
pub mod csv_loader;
pub mod error;
pub mod report;
pub mod simulator;
pub mod solve;
pub mod stdin_loader;
pub mod types;

use std::env;
use std::io;
use std::process::ExitCode;
use tracing::error;

use common::error::Error as ShortestPathError;
use csv_loader::CsvLoader;
use error::Error;
use simulator::SimulatorSource;
use stdin_loader::TokenLoader;
use types::{DataSource, GraphInput, GraphSource};

fn main() -> ExitCode {
    let source = parse_args();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(source, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::GraphError(ShortestPathError::NegativeCycleDetected { affected })) => {
            println!("Warning: Graph contains a negative weight cycle");
            println!("Nodes with unbounded distance: {:?}", affected);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("run failed: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(source: DataSource, config: &config::Config) -> Result<(), Error> {
    let input = load_graph(&source, config)?;
    let graph = input.into_graph()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    solve::run_solve(&graph, &config.solve, &mut out)
}

/// Parse command-line arguments to determine the graph source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "stdin".to_string());

    match source.as_str() {
        "stdin" => DataSource::STDIN,
        "sim" => DataSource::SIM,
        "csv" => match args.get(2) {
            Some(path) => DataSource::CSV(path.clone()),
            None => usage(&args[0]),
        },
        _ => usage(&args[0]),
    }
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <STDIN|CSV|SIM> [path_to_csv]\n  - STDIN: read `n m` then m `from to weight` triples\n  - CSV: read edges from a CSV file with a from,to,weight header\n  - SIM: solve a randomly generated graph",
        program
    );
    std::process::exit(1);
}

fn init_logging(logging: &config::LoggingConfig) -> Result<(), Error> {
    let level = logging.max_level()?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to install logger: {}", e)))
}

fn load_graph(source: &DataSource, config: &config::Config) -> Result<GraphInput, Error> {
    match source {
        DataSource::STDIN => TokenLoader::new(io::stdin().lock()).load(),
        DataSource::CSV(path) => CsvLoader::new(path.clone()).load(),
        DataSource::SIM => SimulatorSource::new(config.simulator.clone()).load(),
    }
}
