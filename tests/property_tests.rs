//! Property-based tests for u-timetable
//!
//! Uses proptest to verify scoring, overlap and operator invariants.

use std::sync::Arc;

use proptest::prelude::*;
use u_timetable::fitness::{conflict_count, fitness, fitness_score};
use u_timetable::ga::operators::{mutate, one_point_crossover};
use u_timetable::ga::{diversity, Individual};
use u_timetable::generator::random_solution;
use u_timetable::models::{Catalog, Course, Day, ScheduleEntry, Semester, TimeSlot};
use u_timetable::random::create_rng;
use u_timetable::tabu::{neighborhood, neighborhood_size, Move, SwapAttribute};
use u_timetable::Solution;

const ROOMS: [&str; 3] = ["301", "302", "Lab"];
const INSTRUCTORS: [&str; 3] = ["Ana", "Budi", "Citra"];

fn arb_entry() -> impl Strategy<Value = ScheduleEntry> {
    (
        0usize..5,
        0u16..1380,
        1u16..60,
        0usize..3,
        0usize..3,
        1u8..4,
        0usize..3,
    )
        .prop_map(|(day, start, len, room, instructor, class, semester)| {
            let instructor = INSTRUCTORS[instructor];
            let course = Arc::new(Course::new(instructor, instructor, 2, [instructor]));
            ScheduleEntry::new(
                Day::ALL[day],
                TimeSlot::new(start, start + len),
                course,
                instructor,
                ROOMS[room],
                class.to_string(),
                Semester::ALL[semester],
            )
            .unwrap()
        })
}

fn arb_solution(max: usize) -> impl Strategy<Value = Solution> {
    prop::collection::vec(arb_entry(), 0..max).prop_map(Solution::new)
}

proptest! {
    // ==================== Scoring ====================

    #[test]
    fn fitness_in_unit_interval(solution in arb_solution(12)) {
        let f = fitness(&solution);
        prop_assert!(f > 0.0 && f <= 1.0);
    }

    #[test]
    fn fitness_one_iff_conflict_free(solution in arb_solution(12)) {
        let conflicts = conflict_count(&solution);
        prop_assert_eq!(fitness(&solution) == 1.0, conflicts == 0);
        prop_assert!((fitness_score(conflicts as f64) - fitness(&solution)).abs() < 1e-12);
    }

    #[test]
    fn conflicts_bounded_by_pairs(solution in arb_solution(12)) {
        let n = solution.len();
        prop_assert!(conflict_count(&solution) <= n * n.saturating_sub(1) / 2);
    }

    // ==================== Overlap ====================

    #[test]
    fn overlap_is_symmetric(a in arb_entry(), b in arb_entry()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert_eq!(a.conflicts_with(&b), b.conflicts_with(&a));
    }

    #[test]
    fn different_rooms_never_overlap(a in arb_entry(), b in arb_entry()) {
        if a.room() != b.room() {
            prop_assert!(!a.overlaps(&b));
        }
    }

    #[test]
    fn overlap_implies_conflict(a in arb_entry(), b in arb_entry()) {
        if a.overlaps(&b) {
            prop_assert!(a.conflicts_with(&b));
        }
    }

    // ==================== Operators ====================

    #[test]
    fn crossover_preserves_length_and_positions(seed in any::<u64>()) {
        let catalog = Catalog::reference();
        let mut rng = create_rng(seed);
        let p1 = random_solution(&catalog, &mut rng).unwrap();
        let p2 = random_solution(&catalog, &mut rng).unwrap();

        let (c1, c2) = one_point_crossover(&p1, &p2, &mut rng);
        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
        for k in 0..p1.len() {
            let from_p1 = c1.entries()[k] == p1.entries()[k] && c2.entries()[k] == p2.entries()[k];
            let from_p2 = c1.entries()[k] == p2.entries()[k] && c2.entries()[k] == p1.entries()[k];
            prop_assert!(from_p1 || from_p2);
        }
    }

    #[test]
    fn zero_rate_mutation_is_identity(seed in any::<u64>()) {
        let catalog = Catalog::reference();
        let mut rng = create_rng(seed);
        let original = random_solution(&catalog, &mut rng).unwrap();
        let mut mutated = original.clone();
        prop_assert_eq!(mutate(&mut mutated, &catalog, 0.0, &mut rng).unwrap(), 0);
        prop_assert_eq!(mutated, original);
    }

    #[test]
    fn identical_population_has_zero_diversity(seed in any::<u64>(), size in 1usize..8) {
        let catalog = Catalog::reference();
        let solution = random_solution(&catalog, &mut create_rng(seed)).unwrap();
        let population: Vec<Individual> =
            (0..size).map(|_| Individual::evaluate(solution.clone())).collect();
        prop_assert_eq!(diversity(&population), 0.0);
    }

    #[test]
    fn diversity_in_unit_interval(seed in any::<u64>(), size in 2usize..8) {
        let catalog = Catalog::reference();
        let mut rng = create_rng(seed);
        let population: Vec<Individual> = (0..size)
            .map(|_| Individual::evaluate(random_solution(&catalog, &mut rng).unwrap()))
            .collect();
        let d = diversity(&population);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    // ==================== Tabu moves ====================

    #[test]
    fn neighborhood_has_expected_size(n in 0usize..30, jitter in 0u16..90, seed in any::<u64>()) {
        let moves = neighborhood(n, jitter, &mut create_rng(seed));
        prop_assert_eq!(moves.len(), neighborhood_size(n));
    }

    #[test]
    fn moves_keep_entries_valid(solution in arb_solution(8), delta in -200i32..200) {
        for index in 0..solution.len() {
            let shifted = Move::Shift { index, delta }.applied_to(&solution);
            let e = &shifted.entries()[index];
            prop_assert!(e.start() < e.end() && e.end() <= 1440);
        }
        for attribute in [SwapAttribute::Room, SwapAttribute::TimeSlot, SwapAttribute::Instructor] {
            if solution.len() >= 2 {
                let swapped = Move::Swap { attribute, i: 0, j: 1 }.applied_to(&solution);
                prop_assert_eq!(swapped.len(), solution.len());
                for e in swapped.entries() {
                    prop_assert!(e.course().is_eligible(e.instructor()));
                }
            }
        }
    }
}
