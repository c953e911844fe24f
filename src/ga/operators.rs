//! Genetic operators for permutation-encoded tours.
//!
//! Both operators are pure transformations over caller-supplied randomness
//! and preserve the permutation invariant: given valid parent permutations
//! they always produce valid permutations.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use super::fitness::Route;
use rand::Rng;

/// Order Crossover (OX).
///
/// Picks two distinct cut points, sorted so `start < end`, copies
/// `parent1[start..=end]` into the child at the same positions, then fills
/// the remaining slots with `parent2`'s cities in encounter order, scanning
/// circularly from `end + 1` and skipping cities already present. Both the
/// child-write cursor and the parent2-read cursor wrap modulo the length.
///
/// When the cut segment spans the whole tour the child equals `parent1`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Route {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_cut_points(n, rng);
    ox_child(parent1, parent2, start, end)
}

/// Builds one OX child for the cut segment `[start, end]` (inclusive).
fn ox_child(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Route {
    let n = parent1.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        present[parent1[i]] = true;
    }

    // Fill from parent2, both cursors starting just past the segment and
    // wrapping around. Exactly n - (end - start + 1) cities remain, so the
    // scan terminates with every slot written once.
    let mut write = (end + 1) % n;
    for offset in 0..n {
        let city = parent2[(end + 1 + offset) % n];
        if !present[city] {
            child[write] = city;
            present[city] = true;
            write = (write + 1) % n;
        }
    }

    child
}

/// Two distinct cut points over `0..n`, returned in ascending order.
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let cuts = rand::seq::index::sample(rng, n, 2);
    let (a, b) = (cuts.index(0), cuts.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Swap mutation: with probability `mutation_rate`, exchanges two distinct
/// positions; otherwise leaves the route untouched.
///
/// Trivially preserves the permutation invariant. Routes shorter than two
/// cities pass through unchanged.
pub fn swap_mutation<R: Rng>(route: &mut [usize], mutation_rate: f64, rng: &mut R) {
    if route.len() < 2 {
        return;
    }
    if rng.random_range(0.0..1.0) < mutation_rate {
        let positions = rand::seq::index::sample(rng, route.len(), 2);
        route.swap(positions.index(0), positions.index(1));
    }
}
