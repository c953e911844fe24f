//! Genetic-algorithm solver for the Traveling Salesman Problem with
//! distributed fitness evaluation.
//!
//! The crate is organized around a small set of composable pieces:
//!
//! - [`matrix::DistanceMatrix`]: a validated square distance table, loadable
//!   from a delimited text file, with an optional marker value for
//!   infeasible edges.
//! - [`ga`]: the evolutionary core — random-permutation initialization,
//!   tournament and elite selection, order crossover (OX), swap mutation,
//!   and the generational loop.
//! - [`ga::FitnessCoordinator`]: a scatter/gather worker pool that splits
//!   each generation's population into contiguous chunks, evaluates them on
//!   independent worker threads, and reassembles the fitness vector in
//!   population order.
//!
//! # Example
//!
//! ```
//! use tsp_evo::ga::{GaConfig, GaRunner};
//! use tsp_evo::matrix::DistanceMatrix;
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])
//! .unwrap();
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_generations(40)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&matrix, &config).unwrap();
//! assert_eq!(result.best_route.len(), 4);
//! println!("total distance: {}", result.total_distance());
//! ```
//!
//! The algorithm is a heuristic: it always runs the configured number of
//! generations and returns the best tour seen, with no optimality guarantee.

pub mod ga;
pub mod matrix;
