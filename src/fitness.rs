//! Conflict evaluation.
//!
//! Both engines minimize [`conflict_count`]. The normalized score
//! `1 / (1 + conflicts)` returned by [`fitness_score`] lies in `(0, 1]`,
//! is higher for better timetables, and is used for reporting only.

use crate::models::Solution;

/// Number of unordered entry pairs that conflict.
///
/// A pair conflicts when both entries fall on the same day with
/// intersecting windows and share a room, an instructor, or a class label
/// within the same semester. Each pair counts at most once.
///
/// # Complexity
/// O(N²) in the number of entries.
pub fn conflict_count(solution: &Solution) -> usize {
    let entries = solution.entries();
    let mut conflicts = 0;
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.conflicts_with(b) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Maps a non-negative cost to `(0, 1]`; zero cost maps to `1.0`.
pub fn fitness_score(cost: f64) -> f64 {
    1.0 / (1.0 + cost.max(0.0))
}

/// Normalized fitness of a solution: `1 / (1 + conflict_count)`.
pub fn fitness(solution: &Solution) -> f64 {
    fitness_score(conflict_count(solution) as f64)
}

/// A cost function over solutions. Lower is better; `0.0` is optimal.
///
/// Any `Fn(&Solution) -> f64` is an objective. The function must be total
/// and deterministic; the tabu engine does not guard against one that is
/// not.
pub trait Objective {
    fn cost(&self, solution: &Solution) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&Solution) -> f64,
{
    fn cost(&self, solution: &Solution) -> f64 {
        self(solution)
    }
}

/// The standard objective: the conflict count as `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictObjective;

impl Objective for ConflictObjective {
    fn cost(&self, solution: &Solution) -> f64 {
        conflict_count(solution) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Day, ScheduleEntry, Semester, TimeSlot};
    use std::sync::Arc;

    fn entry(
        day: Day,
        start: u16,
        end: u16,
        room: &str,
        instructor: &str,
        class: &str,
        semester: Semester,
    ) -> ScheduleEntry {
        let course = Arc::new(Course::new("X", "X", 2, [instructor]));
        ScheduleEntry::new(
            day,
            TimeSlot::new(start, end),
            course,
            instructor,
            room,
            class,
            semester,
        )
        .unwrap()
    }

    #[test]
    fn test_shared_room_overlap_is_one_conflict() {
        let s = Solution::new(vec![
            entry(Day::Mon, 480, 600, "301", "Ana", "1", Semester::Second),
            entry(Day::Mon, 540, 660, "301", "Budi", "2", Semester::Fourth),
        ]);
        assert_eq!(conflict_count(&s), 1);
        assert!((fitness(&s) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pair_counts_once_with_multiple_reasons() {
        let s = Solution::new(vec![
            entry(Day::Mon, 480, 600, "301", "Ana", "1", Semester::Second),
            entry(Day::Mon, 480, 600, "301", "Ana", "1", Semester::Second),
        ]);
        assert_eq!(conflict_count(&s), 1);
    }

    #[test]
    fn test_instructor_conflict_across_rooms() {
        let s = Solution::new(vec![
            entry(Day::Tue, 480, 600, "301", "Ana", "1", Semester::Second),
            entry(Day::Tue, 500, 620, "305", "Ana", "2", Semester::Fourth),
        ]);
        assert_eq!(conflict_count(&s), 1);
    }

    #[test]
    fn test_class_conflict_needs_same_semester() {
        let same = Solution::new(vec![
            entry(Day::Wed, 480, 600, "301", "Ana", "4", Semester::Second),
            entry(Day::Wed, 480, 600, "305", "Budi", "4", Semester::Second),
        ]);
        let other = Solution::new(vec![
            entry(Day::Wed, 480, 600, "301", "Ana", "4", Semester::Second),
            entry(Day::Wed, 480, 600, "305", "Budi", "4", Semester::Fourth),
        ]);
        assert_eq!(conflict_count(&same), 1);
        assert_eq!(conflict_count(&other), 0);
    }

    #[test]
    fn test_touching_windows_and_other_days_do_not_conflict() {
        let s = Solution::new(vec![
            entry(Day::Mon, 480, 600, "301", "Ana", "1", Semester::Second),
            entry(Day::Mon, 600, 720, "301", "Ana", "1", Semester::Second),
            entry(Day::Thu, 480, 600, "301", "Ana", "1", Semester::Second),
        ]);
        assert_eq!(conflict_count(&s), 0);
        assert_eq!(fitness(&s), 1.0);
    }

    #[test]
    fn test_empty_solution_is_optimal() {
        assert_eq!(conflict_count(&Solution::default()), 0);
        assert_eq!(fitness(&Solution::default()), 1.0);
    }

    #[test]
    fn test_closure_objective() {
        let objective = |s: &Solution| s.len() as f64;
        assert_eq!(objective.cost(&Solution::default()), 0.0);
        assert_eq!(ConflictObjective.cost(&Solution::default()), 0.0);
    }

    #[test]
    fn test_fitness_score_range() {
        assert_eq!(fitness_score(0.0), 1.0);
        assert!((fitness_score(3.0) - 0.25).abs() < 1e-12);
        assert_eq!(fitness_score(-1.0), 1.0);
    }
}
