//! Parent and elite selection over an evaluated population.
//!
//! Both operations work on the index-aligned fitness vector produced by the
//! coordinator: `fitness[i]` scores `population[i]`. Higher fitness wins.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::fitness::{Fitness, Route};
use rand::Rng;
use std::cmp::Ordering;

/// Tournament selection: returns the index of the fittest of
/// `tournament_size` distinct contestants drawn uniformly at random.
///
/// Contestants are sampled without replacement, so a tournament never pits
/// an individual against itself. Ties go to the first-encountered
/// contestant. Callers select each parent independently; the same
/// individual may win both parent slots of a child.
///
/// `tournament_size` is clamped to the population size; a size of 1
/// degenerates to uniform random selection.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[Fitness], tournament_size: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let k = tournament_size.clamp(1, fitness.len());
    let contestants = rand::seq::index::sample(rng, fitness.len(), k);

    let mut best = contestants.index(0);
    for idx in contestants.iter().skip(1) {
        if fitness[idx] > fitness[best] {
            best = idx;
        }
    }
    best
}

/// Elite selection: clones of the `elite_size` fittest routes.
///
/// Sorting is stable and descending by fitness, so equal-fitness
/// individuals keep their relative population order. The returned routes
/// are owned copies — elites carried into the next generation never alias
/// the previous one.
pub fn select_elites(population: &[Route], fitness: &[Fitness], elite_size: usize) -> Vec<Route> {
    debug_assert_eq!(population.len(), fitness.len());

    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| fitness[b].partial_cmp(&fitness[a]).unwrap_or(Ordering::Equal));

    order
        .iter()
        .take(elite_size)
        .map(|&idx| population[idx].clone())
        .collect()
}
