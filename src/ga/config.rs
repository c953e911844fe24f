//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop
//! and the evaluation worker pool.

use thiserror::Error;

/// An invalid configuration, rejected before the run starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population_size must be at least 2")]
    PopulationTooSmall,

    #[error("generations must be at least 1")]
    NoGenerations,

    #[error("elite_size ({elite_size}) must be smaller than population_size ({population_size})")]
    TooManyElites {
        elite_size: usize,
        population_size: usize,
    },

    #[error("tournament_size must be at least 1")]
    EmptyTournament,

    #[error("tournament_size ({tournament_size}) must not exceed population_size ({population_size})")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },

    #[error("number of workers must be at least 1")]
    NoWorkers,

    #[error("number of workers ({workers}) must not exceed population_size ({population_size})")]
    TooManyWorkers {
        workers: usize,
        population_size: usize,
    },
}

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.elite_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.02)
///     .with_workers(4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in each generation.
    ///
    /// Typical range: 100–200.
    pub population_size: usize,

    /// Number of generations to run. The loop always executes the full
    /// count; there is no convergence-based early stop.
    pub generations: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is skipped, the child is a clone of the first parent.
    pub crossover_rate: f64,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    ///
    /// Typical range: 0.02–0.1.
    pub mutation_rate: f64,

    /// Number of top individuals carried unchanged into the next
    /// generation.
    pub elite_size: usize,

    /// Number of contestants per selection tournament.
    ///
    /// Typical range: 3–5.
    pub tournament_size: usize,

    /// Number of fitness-evaluation workers.
    ///
    /// `None` uses the machine's available parallelism.
    pub workers: Option<usize>,

    /// Emit a progress observation every this many generations.
    ///
    /// Set to 0 to disable progress reporting.
    pub progress_interval: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            elite_size: 5,
            tournament_size: 3,
            workers: None,
            progress_interval: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites preserved each generation.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n;
        self
    }

    /// Sets the number of evaluation workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the progress-reporting interval (0 disables).
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.elite_size >= self.population_size {
            return Err(ConfigError::TooManyElites {
                elite_size: self.elite_size,
                population_size: self.population_size,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        if self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        match self.workers {
            Some(0) => return Err(ConfigError::NoWorkers),
            Some(workers) if workers > self.population_size => {
                return Err(ConfigError::TooManyWorkers {
                    workers,
                    population_size: self.population_size,
                });
            }
            _ => {}
        }
        Ok(())
    }
}
