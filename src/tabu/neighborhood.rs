//! Neighborhood enumeration.

use rand::Rng;

use super::types::{Move, SwapAttribute};

const SWAP_ATTRIBUTES: [SwapAttribute; 3] = [
    SwapAttribute::Room,
    SwapAttribute::TimeSlot,
    SwapAttribute::Instructor,
];

/// Enumerates the neighborhood of a solution with `n` entries.
///
/// For every unordered pair `i < j` this yields a room swap, a time-slot
/// swap and an instructor swap, followed by one shift per entry with a
/// delta drawn uniformly from `[-jitter, jitter]`. The result always holds
/// `3 · n(n−1)/2 + n` moves; duplicates of the current solution (no-op
/// moves) are not filtered.
pub fn neighborhood<R: Rng>(n: usize, jitter: u16, rng: &mut R) -> Vec<Move> {
    let mut moves = Vec::with_capacity(neighborhood_size(n));
    for i in 0..n {
        for j in (i + 1)..n {
            for attribute in SWAP_ATTRIBUTES {
                moves.push(Move::Swap { attribute, i, j });
            }
        }
    }
    let jitter = i32::from(jitter);
    for index in 0..n {
        let delta = rng.random_range(-jitter..=jitter);
        moves.push(Move::Shift { index, delta });
    }
    moves
}

/// Number of moves [`neighborhood`] yields for `n` entries.
pub fn neighborhood_size(n: usize) -> usize {
    3 * n * n.saturating_sub(1) / 2 + n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_neighborhood_size() {
        let mut rng = create_rng(1);
        for n in [0, 1, 2, 3, 24] {
            assert_eq!(neighborhood(n, 30, &mut rng).len(), neighborhood_size(n));
        }
        assert_eq!(neighborhood_size(3), 12);
        assert_eq!(neighborhood_size(24), 852);
    }

    #[test]
    fn test_shift_deltas_within_jitter() {
        let mut rng = create_rng(2);
        let moves = neighborhood(40, 15, &mut rng);
        let shifts: Vec<i32> = moves
            .iter()
            .filter_map(|m| match m {
                Move::Shift { delta, .. } => Some(*delta),
                _ => None,
            })
            .collect();
        assert_eq!(shifts.len(), 40);
        assert!(shifts.iter().all(|d| (-15..=15).contains(d)));
    }

    #[test]
    fn test_zero_jitter_shifts_are_zero() {
        let mut rng = create_rng(3);
        let moves = neighborhood(5, 0, &mut rng);
        assert!(moves
            .iter()
            .all(|m| !matches!(m, Move::Shift { delta, .. } if *delta != 0)));
    }

    #[test]
    fn test_swap_pairs_are_ordered() {
        let mut rng = create_rng(4);
        for m in neighborhood(6, 30, &mut rng) {
            if let Move::Swap { i, j, .. } = m {
                assert!(i < j && j < 6);
            }
        }
    }
}
