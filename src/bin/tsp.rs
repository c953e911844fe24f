//! Command-line entry point: load a distance matrix, run the GA, report
//! the best tour.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tsp_evo::ga::{GaConfig, GaRunner};
use tsp_evo::matrix::DistanceMatrix;

/// Genetic-algorithm TSP solver with worker-pool fitness evaluation.
#[derive(Debug, Parser)]
#[command(name = "tsp", version)]
struct Args {
    /// Path to the distance-matrix CSV file (first row is a header).
    #[arg(long, default_value = "data/city_distances.csv")]
    file_path: PathBuf,

    /// Number of individuals per generation.
    #[arg(long, default_value_t = 200)]
    population_size: usize,

    /// Number of generations to run.
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Probability of crossover per bred child.
    #[arg(long, default_value_t = 0.9)]
    crossover_rate: f64,

    /// Probability of swap mutation per bred child.
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Number of elites carried unchanged into each generation.
    #[arg(long, default_value_t = 5)]
    elite_size: usize,

    /// Number of contestants per selection tournament.
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// Number of evaluation workers (defaults to available parallelism).
    #[arg(long)]
    workers: Option<usize>,

    /// Random seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Split the final tour into this many contiguous vehicle routes.
    #[arg(long, default_value_t = 1)]
    cars: usize,
}

fn main() {
    let args = Args::parse();

    let matrix = match DistanceMatrix::load_csv(&args.file_path) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("error: {} ({})", err, args.file_path.display());
            process::exit(1);
        }
    };
    println!("loaded distance matrix with {} cities", matrix.size());

    let mut config = GaConfig::default()
        .with_population_size(args.population_size)
        .with_generations(args.generations)
        .with_crossover_rate(args.crossover_rate)
        .with_mutation_rate(args.mutation_rate)
        .with_elite_size(args.elite_size)
        .with_tournament_size(args.tournament_size);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let start = Instant::now();
    let result = GaRunner::run_with_observer(&matrix, &config, |generation, best| {
        println!("generation {generation}: best fitness = {best}");
    });
    let result = match result {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    if args.cars > 1 {
        println!("best solution for {} cars:", args.cars);
        for (car, route) in result.split_into_routes(args.cars).iter().enumerate() {
            println!("car {}: {:?}", car + 1, route);
        }
    } else {
        println!("best route: {:?}", result.best_route);
    }
    println!("total distance: {}", result.total_distance());
    println!(
        "execution time: {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
}
