//! Timetable crossover and mutation operators.
//!
//! Operators never alias their inputs: parents are read through shared
//! references and children are built from cloned entries.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: cut once, exchange suffixes
//!
//! # Mutation
//!
//! - [`mutate`]: per-entry re-randomization of time slot, day or room

use rand::Rng;

use crate::error::Result;
use crate::generator::{random_day, random_room, random_slot};
use crate::models::{Catalog, Solution};

/// One-point crossover.
///
/// Picks a cut `c` uniformly in `[1, N − 1]` and returns
/// `(p1[..c] ++ p2[c..], p2[..c] ++ p1[c..])`. Solutions shorter than two
/// entries (or of unequal length) are passed through as copies.
pub fn one_point_crossover<R: Rng>(
    parent1: &Solution,
    parent2: &Solution,
    rng: &mut R,
) -> (Solution, Solution) {
    let n = parent1.len();
    if n < 2 || n != parent2.len() {
        return (parent1.clone(), parent2.clone());
    }
    let cut = rng.random_range(1..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

fn splice(head: &Solution, tail: &Solution, cut: usize) -> Solution {
    head.entries()[..cut]
        .iter()
        .chain(&tail.entries()[cut..])
        .cloned()
        .collect::<Vec<_>>()
        .into()
}

/// Which attribute a mutation re-draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gene {
    Slot,
    Day,
    Room,
}

/// Per-entry mutation.
///
/// Each entry is picked with probability `rate`; a picked entry gets one
/// of {time slot, day, room} re-drawn uniformly at random, each attribute
/// chosen with probability ⅓. Returns the number of picked entries.
///
/// # Errors
/// Only if the catalog has no rooms, which validation rules out.
pub fn mutate<R: Rng>(
    solution: &mut Solution,
    catalog: &Catalog,
    rate: f64,
    rng: &mut R,
) -> Result<usize> {
    let mut mutated = 0;
    for entry in solution.entries_mut() {
        if rng.random_range(0.0..1.0) >= rate {
            continue;
        }
        let gene = match rng.random_range(0..3) {
            0 => Gene::Slot,
            1 => Gene::Day,
            _ => Gene::Room,
        };
        match gene {
            Gene::Slot => entry.set_slot(random_slot(rng)),
            Gene::Day => entry.set_day(random_day(rng)),
            Gene::Room => entry.set_room(random_room(catalog, rng)?),
        }
        mutated += 1;
    }
    Ok(mutated)
}
