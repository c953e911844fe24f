//! The evolutionary loop.
//!
//! [`GaRunner`] orchestrates a full run: initialization → per-generation
//! evaluate / elite-carryover / breed-to-fill / replace → best-ever
//! tracking and periodic progress observations.

use super::config::{ConfigError, GaConfig};
use super::coordinator::FitnessCoordinator;
use super::fitness::{Fitness, Route};
use super::operators::{order_crossover, swap_mutation};
use super::population::random_population;
use super::selection::{select_elites, tournament};
use crate::matrix::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best_route: Route,

    /// Fitness of `best_route` (negated tour length).
    pub best_fitness: Fitness,

    /// Number of generations executed (always the configured count).
    pub generations: usize,

    /// Best-ever fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

impl GaResult {
    /// Total length of the best tour, as a non-negative distance.
    pub fn total_distance(&self) -> f64 {
        -self.best_fitness
    }

    /// Splits the best tour into `vehicles` contiguous sub-routes.
    ///
    /// A thin output transform for multi-vehicle reporting: the tour is cut
    /// into chunks of `len / vehicles` cities, the last chunk absorbing any
    /// remainder. The vehicle count is capped at the tour length; 0 yields
    /// no routes.
    pub fn split_into_routes(&self, vehicles: usize) -> Vec<Route> {
        let n = self.best_route.len();
        if vehicles == 0 || n == 0 {
            return Vec::new();
        }

        let vehicles = vehicles.min(n);
        let chunk_size = n / vehicles;
        (0..vehicles)
            .map(|i| {
                let start = i * chunk_size;
                let end = if i == vehicles - 1 {
                    n
                } else {
                    start + chunk_size
                };
                self.best_route[start..end].to_vec()
            })
            .collect()
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```no_run
/// use tsp_evo::ga::{GaConfig, GaRunner};
/// use tsp_evo::matrix::DistanceMatrix;
///
/// let matrix = DistanceMatrix::load_csv("data/city_distances.csv")?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&matrix, &config)?;
/// println!("total distance: {}", result.total_distance());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// Returns `Err` if the configuration is invalid; the run does not
    /// start in that case.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_observer(matrix, config, |_, _| {})
    }

    /// Runs the GA, invoking `observe(generation, best_fitness)` every
    /// [`progress_interval`](GaConfig::progress_interval) generations.
    pub fn run_with_observer<F>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        mut observe: F,
    ) -> Result<GaResult, ConfigError>
    where
        F: FnMut(usize, Fitness),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let coordinator = match config.workers {
            Some(workers) => FitnessCoordinator::new(workers),
            None => FitnessCoordinator::with_available_parallelism(),
        };

        let num_cities = matrix.size();
        let mut population = random_population(num_cities, config.population_size, &mut rng);

        let mut best_route: Option<Route> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut fitness_history = Vec::with_capacity(config.generations);

        for generation in 1..=config.generations {
            // Scatter/gather: blocks until every worker's chunk is scored.
            let fitness = coordinator.evaluate_all(&population, matrix);

            // Track the best-ever individual from the evaluated population.
            let (gen_best_idx, gen_best_fitness) = argmax(&fitness);
            if gen_best_fitness > best_fitness {
                best_fitness = gen_best_fitness;
                best_route = Some(population[gen_best_idx].clone());
            }

            // Elites bypass crossover and mutation entirely.
            let mut next_gen = select_elites(&population, &fitness, config.elite_size);

            while next_gen.len() < config.population_size {
                let parent1 = tournament(&fitness, config.tournament_size, &mut rng);
                let parent2 = tournament(&fitness, config.tournament_size, &mut rng);

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    order_crossover(&population[parent1], &population[parent2], &mut rng)
                } else {
                    population[parent1].clone()
                };
                swap_mutation(&mut child, config.mutation_rate, &mut rng);

                next_gen.push(child);
            }

            population = next_gen;
            fitness_history.push(best_fitness);

            if config.progress_interval > 0 && generation % config.progress_interval == 0 {
                observe(generation, best_fitness);
            }
        }

        Ok(GaResult {
            // validate() guarantees at least one generation over a
            // non-empty population, so a best route was recorded.
            best_route: best_route.expect("at least one generation was evaluated"),
            best_fitness,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Index and value of the greatest fitness.
///
/// Ties go to the first-encountered index.
fn argmax(fitness: &[Fitness]) -> (usize, Fitness) {
    let mut best_idx = 0;
    for (idx, &value) in fitness.iter().enumerate().skip(1) {
        if value > fitness[best_idx] {
            best_idx = idx;
        }
    }
    (best_idx, fitness[best_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_city_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_generations(40)
            .with_elite_size(3)
            .with_workers(2)
            .with_seed(42)
    }

    #[test]
    fn test_finds_optimal_four_city_tour() {
        // The optimal closed tour over this matrix costs 80.
        let result = GaRunner::run(&four_city_matrix(), &small_config()).unwrap();
        assert_eq!(result.total_distance(), 80.0);
        assert_eq!(result.best_fitness, -80.0);
    }

    #[test]
    fn test_best_route_is_a_permutation() {
        let result = GaRunner::run(&four_city_matrix(), &small_config()).unwrap();
        let mut sorted = result.best_route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_runs_full_generation_count() {
        let config = small_config().with_generations(17);
        let result = GaRunner::run(&four_city_matrix(), &config).unwrap();
        assert_eq!(result.generations, 17);
        assert_eq!(result.fitness_history.len(), 17);
    }

    #[test]
    fn test_best_fitness_never_decreases() {
        let result = GaRunner::run(&four_city_matrix(), &small_config()).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best-ever fitness regressed: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let matrix = four_city_matrix();
        let config = small_config();
        let first = GaRunner::run(&matrix, &config).unwrap();
        let second = GaRunner::run(&matrix, &config).unwrap();
        assert_eq!(first.best_route, second.best_route);
        assert_eq!(first.fitness_history, second.fitness_history);
    }

    #[test]
    fn test_invalid_config_rejected_before_run() {
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(&four_city_matrix(), &config).is_err());
    }

    #[test]
    fn test_observer_cadence() {
        let config = small_config()
            .with_generations(25)
            .with_progress_interval(10);
        let mut observed = Vec::new();
        GaRunner::run_with_observer(&four_city_matrix(), &config, |generation, best| {
            observed.push((generation, best));
        })
        .unwrap();

        let generations: Vec<usize> = observed.iter().map(|&(g, _)| g).collect();
        assert_eq!(generations, vec![10, 20]);

        // The observed values are the history entries at those generations.
        let result = GaRunner::run(&four_city_matrix(), &config).unwrap();
        for &(generation, best) in &observed {
            assert_eq!(best, result.fitness_history[generation - 1]);
        }
    }

    #[test]
    fn test_observer_disabled() {
        let config = small_config().with_progress_interval(0);
        let mut calls = 0;
        GaRunner::run_with_observer(&four_city_matrix(), &config, |_, _| calls += 1).unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_worker_count_does_not_change_the_search() {
        // Evaluation order is fixed by the gather, so the run is identical
        // whichever way the population is chunked.
        let matrix = four_city_matrix();
        let base = GaRunner::run(&matrix, &small_config().with_workers(1)).unwrap();
        for workers in [2, 3, 5] {
            let result = GaRunner::run(&matrix, &small_config().with_workers(workers)).unwrap();
            assert_eq!(result.best_route, base.best_route);
            assert_eq!(result.fitness_history, base.fitness_history);
        }
    }

    // ---- Vehicle splitting ----

    fn result_with_route(route: Route) -> GaResult {
        GaResult {
            best_fitness: -1.0,
            generations: 1,
            fitness_history: vec![-1.0],
            best_route: route,
        }
    }

    #[test]
    fn test_split_even() {
        let result = result_with_route((0..10).collect());
        let routes = result.split_into_routes(5);
        assert_eq!(routes.len(), 5);
        assert!(routes.iter().all(|r| r.len() == 2));
        assert_eq!(routes.concat(), (0..10).collect::<Vec<usize>>());
    }

    #[test]
    fn test_split_remainder_goes_to_last_vehicle() {
        let result = result_with_route((0..11).collect());
        let routes = result.split_into_routes(5);
        assert_eq!(routes.len(), 5);
        assert_eq!(routes[4], vec![8, 9, 10]);
        assert_eq!(routes.concat(), (0..11).collect::<Vec<usize>>());
    }

    #[test]
    fn test_split_single_vehicle_is_whole_tour() {
        let result = result_with_route(vec![3, 1, 0, 2]);
        assert_eq!(result.split_into_routes(1), vec![vec![3, 1, 0, 2]]);
    }

    #[test]
    fn test_split_more_vehicles_than_cities() {
        let result = result_with_route(vec![1, 0, 2]);
        let routes = result.split_into_routes(7);
        assert_eq!(routes.len(), 3);
        assert_eq!(routes.concat(), vec![1, 0, 2]);
    }

    #[test]
    fn test_split_zero_vehicles() {
        let result = result_with_route(vec![0, 1]);
        assert!(result.split_into_routes(0).is_empty());
    }
}
