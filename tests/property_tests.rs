//! Property-based tests for the GA core.
//!
//! Uses proptest to verify the invariants that hold for every input:
//! permutation validity, fitness sign convention, and gather completeness.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_evo::ga::operators::{order_crossover, swap_mutation};
use tsp_evo::ga::population::random_population;
use tsp_evo::ga::{route_fitness, FitnessCoordinator, INFEASIBLE_FITNESS};
use tsp_evo::matrix::DistanceMatrix;

fn is_valid_permutation(route: &[usize], n: usize) -> bool {
    let mut sorted = route.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<usize>>()
}

fn grid_matrix(n: usize) -> DistanceMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0.0 } else { (i * n + j) as f64 + 1.0 })
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows).unwrap()
}

proptest! {
    // ==================== Permutation invariant ====================

    #[test]
    fn initial_population_is_all_permutations(
        n in 1usize..40,
        size in 1usize..30,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for route in random_population(n, size, &mut rng) {
            prop_assert!(is_valid_permutation(&route, n));
        }
    }

    #[test]
    fn crossover_child_is_a_permutation(n in 2usize..50, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let population = random_population(n, 2, &mut rng);
        let child = order_crossover(&population[0], &population[1], &mut rng);
        prop_assert!(is_valid_permutation(&child, n));
    }

    #[test]
    fn mutation_preserves_permutation(n in 2usize..50, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut route = random_population(n, 1, &mut rng).pop().unwrap();
        swap_mutation(&mut route, 1.0, &mut rng);
        prop_assert!(is_valid_permutation(&route, n));
    }

    // ==================== Fitness sign convention ====================

    #[test]
    fn feasible_fitness_is_non_positive(n in 1usize..20, seed in any::<u64>()) {
        let matrix = grid_matrix(n);
        let mut rng = StdRng::seed_from_u64(seed);
        let route = random_population(n, 1, &mut rng).pop().unwrap();
        let fitness = route_fitness(&route, &matrix);
        prop_assert!(fitness <= 0.0);
        prop_assert!(fitness > INFEASIBLE_FITNESS);
    }

    #[test]
    fn negated_fitness_equals_edge_sum(n in 2usize..15, seed in any::<u64>()) {
        let matrix = grid_matrix(n);
        let mut rng = StdRng::seed_from_u64(seed);
        let route = random_population(n, 1, &mut rng).pop().unwrap();

        let mut total = 0.0;
        for i in 0..n {
            total += matrix.get(route[i], route[(i + 1) % n]);
        }
        prop_assert_eq!(-route_fitness(&route, &matrix), total);
    }

    #[test]
    fn wrong_length_route_scores_sentinel(n in 2usize..15, extra in 1usize..5) {
        let matrix = grid_matrix(n);
        let short: Vec<usize> = (0..n - 1).collect();
        let long: Vec<usize> = (0..n).chain(0..extra).collect();
        prop_assert_eq!(route_fitness(&short, &matrix), INFEASIBLE_FITNESS);
        prop_assert_eq!(route_fitness(&long, &matrix), INFEASIBLE_FITNESS);
    }

    // ==================== Gather completeness ====================

    #[test]
    fn gather_matches_sequential_for_any_worker_count(
        n in 2usize..12,
        population_size in 1usize..40,
        workers in 1usize..10,
        seed in any::<u64>()
    ) {
        let matrix = grid_matrix(n);
        let mut rng = StdRng::seed_from_u64(seed);
        let population = random_population(n, population_size, &mut rng);

        let gathered = FitnessCoordinator::new(workers).evaluate_all(&population, &matrix);
        let sequential: Vec<f64> = population
            .iter()
            .map(|route| route_fitness(route, &matrix))
            .collect();

        prop_assert_eq!(gathered.len(), population.len());
        prop_assert_eq!(gathered, sequential);
    }
}
