pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod graph;
pub mod matrix;
pub mod observer;
pub mod paths;
pub mod traits;

pub use bellman_ford::BellmanFordSolver;
pub use dijkstra::DijkstraSolver;
pub use floyd_warshall::FloydWarshallSolver;
pub use graph::Graph;
pub use matrix::Matrix;
pub use observer::{NoopObserver, Progress, ProgressObserver};
pub use paths::{AllPairsPaths, ShortestPaths};
pub use traits::ShortestPathSolver;
