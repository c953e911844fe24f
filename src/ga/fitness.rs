//! Route fitness evaluation.
//!
//! Fitness is the *negated* total length of the closed tour, turning the
//! minimization problem into a maximization: higher fitness is better, and
//! `-fitness` is the human-readable total distance.

use crate::matrix::DistanceMatrix;

/// A tour: an ordered sequence of node indices, each used exactly once.
///
/// The closing edge from the last node back to the first is implicit.
pub type Route = Vec<usize>;

/// Maximization-oriented score of a route: the negated tour length.
pub type Fitness = f64;

/// Sentinel fitness for infeasible routes.
///
/// Returned for routes whose length does not match the matrix and for
/// tours that traverse an edge marked infeasible in the matrix. Large
/// enough in magnitude that such routes lose every tournament against any
/// feasible route, without aborting the batch they belong to.
pub const INFEASIBLE_FITNESS: Fitness = -1_000_000.0;

/// Evaluates a route against a distance matrix.
///
/// Sums the cost of consecutive edges plus the closing edge back to the
/// start, and returns the negated total. Two conditions short-circuit to
/// [`INFEASIBLE_FITNESS`] instead of raising:
///
/// - the route length differs from the matrix size;
/// - any traversed edge equals the matrix's infeasible marker.
///
/// Pure and deterministic: identical inputs always produce the same score.
pub fn route_fitness(route: &[usize], matrix: &DistanceMatrix) -> Fitness {
    let num_cities = matrix.size();
    if route.len() != num_cities {
        return INFEASIBLE_FITNESS;
    }

    let mut total = 0.0;
    for pair in route.windows(2) {
        let distance = matrix.get(pair[0], pair[1]);
        if matrix.is_infeasible(distance) {
            return INFEASIBLE_FITNESS;
        }
        total += distance;
    }

    // Close the tour back to the starting node.
    let closing = matrix.get(route[route.len() - 1], route[0]);
    if matrix.is_infeasible(closing) {
        return INFEASIBLE_FITNESS;
    }
    total += closing;

    -total
}
