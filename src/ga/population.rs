//! Population initialization.

use super::fitness::Route;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates `population_size` independent uniform random tours.
///
/// Each tour is a permutation of `0..num_cities` produced by a
/// Fisher–Yates shuffle, so every permutation is equally likely. Two
/// individuals may coincide; no deduplication is attempted.
pub fn random_population<R: Rng>(
    num_cities: usize,
    population_size: usize,
    rng: &mut R,
) -> Vec<Route> {
    (0..population_size)
        .map(|_| {
            let mut route: Route = (0..num_cities).collect();
            route.shuffle(rng);
            route
        })
        .collect()
}
