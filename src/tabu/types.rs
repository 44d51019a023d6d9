//! Moves, the tabu list, and per-iteration statistics.

use std::collections::{HashMap, VecDeque};

use crate::models::Solution;

/// Attribute exchanged between two entries by a swap move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapAttribute {
    Room,
    TimeSlot,
    Instructor,
}

/// A compact neighborhood move.
///
/// Moves double as tabu-list keys, so membership checks are O(1) and the
/// list never holds whole solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Exchange one attribute between positions `i` and `j`.
    Swap {
        attribute: SwapAttribute,
        i: usize,
        j: usize,
    },
    /// Shift the window of the entry at `index` by `delta` minutes,
    /// clamped to the day.
    Shift { index: usize, delta: i32 },
}

impl Move {
    /// Applies the move in place.
    ///
    /// Moves that cannot apply leave the solution unchanged: indices out
    /// of range or equal, an instructor not eligible for the other course,
    /// or a shift that would collapse the window.
    pub fn apply(&self, solution: &mut Solution) {
        let n = solution.len();
        match *self {
            Move::Swap { attribute, i, j } => {
                if i == j || i >= n || j >= n {
                    return;
                }
                let (a, b) = solution.pair_mut(i, j);
                match attribute {
                    SwapAttribute::Room => a.swap_room(b),
                    SwapAttribute::TimeSlot => a.swap_slot(b),
                    SwapAttribute::Instructor => {
                        a.swap_instructor(b);
                    }
                }
            }
            Move::Shift { index, delta } => {
                if let Some(entry) = solution.entries_mut().get_mut(index) {
                    entry.shift(delta);
                }
            }
        }
    }

    /// Returns a copy of `solution` with the move applied.
    pub fn applied_to(&self, solution: &Solution) -> Solution {
        let mut neighbor = solution.clone();
        self.apply(&mut neighbor);
        neighbor
    }
}

/// Fixed-capacity FIFO of recently accepted moves.
///
/// A move may sit in the queue more than once; a per-move count keeps
/// membership correct when an older copy is evicted.
#[derive(Debug, Clone)]
pub struct TabuList {
    queue: VecDeque<Move>,
    counts: HashMap<Move, usize>,
    capacity: usize,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity + 1),
            counts: HashMap::new(),
            capacity,
        }
    }

    /// Appends `mv`, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, mv: Move) {
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;
        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                if let Some(count) = self.counts.get_mut(&old) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&old);
                    }
                }
            }
        }
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.counts.contains_key(mv)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Moves from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Move> + '_ {
        self.queue.iter()
    }
}

/// How the accepted neighbor of an iteration was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Best non-tabu neighbor.
    Admissible,
    /// Met the aspiration criterion; the scan stopped there.
    Aspiration,
    /// No admissible neighbor; picked uniformly at random.
    Diversification,
}

/// Statistics recorded at the end of each iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Best cost seen so far, including this iteration.
    pub best_cost: f64,
    /// `1 / (1 + best_cost)`.
    pub best_fitness: f64,
    /// Cost of the accepted neighbor.
    pub current_cost: f64,
    /// `1 / (1 + current_cost)`.
    pub current_fitness: f64,
    /// Tabu queue length after the push.
    pub tabu_len: usize,
    /// The accepted move.
    pub accepted: Move,
    /// How it was accepted.
    pub acceptance: Acceptance,
}

/// Aggregated Tabu Search metrics.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuMetrics {
    /// One record per executed iteration.
    pub history: Vec<IterationStats>,
    /// Iterations that fell back to a random neighbor.
    pub diversification_count: usize,
    /// New bests that cleared the intensification threshold.
    pub intensification_count: usize,
    /// Iterations whose accepted cost did not clear the diversification
    /// threshold.
    pub unproductive_count: usize,
}
