//! Distributed fitness evaluation.
//!
//! [`FitnessCoordinator`] scatters a population across a fixed pool of
//! worker threads, has each worker score its own contiguous chunk, and
//! gathers the local fitness vectors back into one vector in population
//! order. The caller is the coordinating role: it blocks until every
//! worker has finished (the scope join is the barrier) and is the only
//! receiver of the assembled vector.
//!
//! Workers never see the global population — each borrows only its chunk
//! and the shared read-only distance matrix, so no synchronization on
//! population data is needed. Results travel over a rank-tagged channel
//! rather than shared memory.
//!
//! A worker that never finishes stalls the generation indefinitely: there
//! is no timeout, retry, or partial-result fallback.

use super::fitness::{route_fitness, Fitness, Route};
use crate::matrix::DistanceMatrix;
use crossbeam_channel::unbounded;
use std::thread;

/// Scatter/gather worker pool for population fitness evaluation.
pub struct FitnessCoordinator {
    workers: usize,
}

impl FitnessCoordinator {
    /// Creates a coordinator with a fixed worker count (at least 1).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Creates a coordinator sized to the machine's available parallelism.
    pub fn with_available_parallelism() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }

    /// Configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Evaluates every route in the population and returns the fitness
    /// vector, index-aligned with the input.
    ///
    /// The population is partitioned into contiguous chunks of
    /// `population_size / workers` routes; the last worker's chunk extends
    /// to the population end so the remainder of an uneven division is
    /// evaluated rather than dropped. Each worker scores its chunk in
    /// input order and sends `(rank, local_fitness)` over a channel; the
    /// locals are concatenated in rank order once all workers have joined.
    ///
    /// Synchronous: the call blocks until the gather is complete. The
    /// worker count is capped at the population size.
    pub fn evaluate_all(&self, population: &[Route], matrix: &DistanceMatrix) -> Vec<Fitness> {
        if population.is_empty() {
            return Vec::new();
        }

        let workers = self.workers.min(population.len());
        let chunk_size = population.len() / workers;
        let (sender, receiver) = unbounded::<(usize, Vec<Fitness>)>();

        thread::scope(|scope| {
            for rank in 0..workers {
                let start = rank * chunk_size;
                let end = if rank == workers - 1 {
                    population.len()
                } else {
                    start + chunk_size
                };
                let chunk = &population[start..end];
                let sender = sender.clone();

                scope.spawn(move || {
                    let local: Vec<Fitness> = chunk
                        .iter()
                        .map(|route| route_fitness(route, matrix))
                        .collect();
                    // The receiver outlives the scope, so the send only
                    // fails if the coordinator itself is gone.
                    let _ = sender.send((rank, local));
                });
            }
        });
        drop(sender);

        let mut gathered: Vec<(usize, Vec<Fitness>)> = receiver.iter().collect();
        gathered.sort_by_key(|&(rank, _)| rank);

        let mut fitness = Vec::with_capacity(population.len());
        for (_, local) in gathered {
            fitness.extend(local);
        }
        fitness
    }
}
