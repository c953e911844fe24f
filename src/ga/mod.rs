//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! A tour is a permutation of node indices; its fitness is the negated
//! closed-tour length, so higher is uniformly better. The module is split
//! by responsibility:
//!
//! - [`fitness`]: route cost evaluation with infeasibility sentinels
//! - [`population`]: random-permutation population initialization
//! - [`selection`]: tournament and elite selection over a scored population
//! - [`operators`]: order crossover (OX) and swap mutation
//! - [`coordinator`]: scatter/gather distribution of fitness evaluation
//!   across a fixed pool of worker threads
//! - [`runner`]: the generational loop tying everything together
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters (population size, rates, workers)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best tour found plus run statistics
//! - [`FitnessCoordinator`]: the worker-pool evaluation barrier
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
pub mod coordinator;
pub mod fitness;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;

pub use config::{ConfigError, GaConfig};
pub use coordinator::FitnessCoordinator;
pub use fitness::{route_fitness, Fitness, Route, INFEASIBLE_FITNESS};
pub use runner::{GaResult, GaRunner};
