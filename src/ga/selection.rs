//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use super::types::Individual;

/// Tournament selection without replacement.
///
/// Samples `min(k, population.len())` distinct members uniformly and
/// returns the index of the one with the fewest conflicts (the first
/// sampled on ties).
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();
    let k = k.clamp(1, n);

    index::sample(rng, n, k)
        .into_iter()
        .min_by_key(|&i| population[i].conflicts)
        .unwrap_or(0)
}
