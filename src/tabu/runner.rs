//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a caller-supplied timetable
//! 2. At each iteration:
//!    a. Enumerate the neighborhood (pairwise swaps and per-entry shifts)
//!    b. Accept the first neighbor meeting the aspiration criterion, else
//!       the lowest-cost non-tabu neighbor, else a random neighbor
//!    c. Update the global best on strict improvement
//!    d. Push the accepted move onto the tabu list
//! 3. Terminate on a zero-cost timetable or after max iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use rand::Rng;

use super::config::TabuConfig;
use super::neighborhood::neighborhood;
use super::types::{Acceptance, IterationStats, Move, TabuList, TabuMetrics};
use crate::error::{Result, TimetableError};
use crate::fitness::{fitness_score, Objective};
use crate::models::Solution;
use crate::observer::{Algorithm, LogObserver, RunSummary, SearchObserver};
use crate::random::rng_from;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best timetable found.
    pub best: Solution,
    /// Cost of the best timetable.
    pub best_cost: f64,
    /// `1 / (1 + best_cost)`.
    pub best_fitness: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Zero-based iteration that found the best timetable; `None` if the
    /// initial timetable was never beaten.
    pub best_iteration: Option<usize>,
    /// Whether the run stopped on a zero-cost timetable.
    pub optimal: bool,
    /// Per-iteration history and counters.
    pub metrics: TabuMetrics,
}

struct Candidate {
    mv: Move,
    solution: Solution,
    cost: f64,
}

/// Tabu Search runner.
///
/// # Examples
///
/// ```
/// use u_timetable::fitness::{conflict_count, ConflictObjective};
/// use u_timetable::generator::SolutionGenerator;
/// use u_timetable::models::Catalog;
/// use u_timetable::random::create_rng;
/// use u_timetable::tabu::{TabuConfig, TabuRunner};
/// use std::sync::Arc;
///
/// let generator = SolutionGenerator::new(Arc::new(Catalog::reference()));
/// let initial = generator.generate(&mut create_rng(1)).unwrap();
/// let config = TabuConfig::default().with_max_iterations(5).with_seed(1);
///
/// let result = TabuRunner::run(&ConflictObjective, &initial, &config).unwrap();
/// assert!(result.best_cost <= conflict_count(&initial) as f64);
/// ```
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search from `initial`, reporting through [`LogObserver`].
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] if `config` fails validation.
    pub fn run<F: Objective + ?Sized>(
        objective: &F,
        initial: &Solution,
        config: &TabuConfig,
    ) -> Result<TabuResult> {
        Self::run_with_observer(objective, initial, config, &mut LogObserver)
    }

    /// Runs Tabu Search from `initial`, reporting progress to `observer`.
    pub fn run_with_observer<F, O>(
        objective: &F,
        initial: &Solution,
        config: &TabuConfig,
        observer: &mut O,
    ) -> Result<TabuResult>
    where
        F: Objective + ?Sized,
        O: SearchObserver + ?Sized,
    {
        config.validate().map_err(TimetableError::InvalidConfig)?;

        let mut rng = rng_from(config.seed);

        let mut current = initial.clone();
        let mut best = current.clone();
        let mut best_cost = objective.cost(&current);
        let mut best_iteration = None;

        let mut tabu = TabuList::new(config.tabu_size);
        let mut metrics = TabuMetrics {
            history: Vec::with_capacity(config.max_iterations),
            ..TabuMetrics::default()
        };
        let mut iterations = 0;

        for iteration in 0..config.max_iterations {
            if best_cost <= 0.0 {
                break;
            }

            let moves = neighborhood(current.len(), config.jitter_minutes, &mut rng);
            if moves.is_empty() {
                break;
            }
            iterations = iteration + 1;

            let (chosen, acceptance) =
                match select(objective, &current, &moves, &tabu, best_cost, config) {
                    Some(found) => found,
                    None => {
                        metrics.diversification_count += 1;
                        let mv = moves[rng.random_range(0..moves.len())];
                        let solution = mv.applied_to(&current);
                        let cost = objective.cost(&solution);
                        (Candidate { mv, solution, cost }, Acceptance::Diversification)
                    }
                };

            if config.is_unproductive(chosen.cost, best_cost) {
                metrics.unproductive_count += 1;
            }
            if chosen.cost < best_cost {
                if config.intensifies(chosen.cost, best_cost) {
                    metrics.intensification_count += 1;
                }
                best = chosen.solution.clone();
                best_cost = chosen.cost;
                best_iteration = Some(iteration);
            }

            current = chosen.solution;
            tabu.push(chosen.mv);

            let stats = IterationStats {
                iteration,
                best_cost,
                best_fitness: fitness_score(best_cost),
                current_cost: chosen.cost,
                current_fitness: fitness_score(chosen.cost),
                tabu_len: tabu.len(),
                accepted: chosen.mv,
                acceptance,
            };
            observer.on_iteration(&stats);
            metrics.history.push(stats);
        }

        let optimal = best_cost <= 0.0;
        let result = TabuResult {
            best,
            best_cost,
            best_fitness: fitness_score(best_cost),
            iterations,
            best_iteration,
            optimal,
            metrics,
        };
        observer.on_finish(&RunSummary {
            algorithm: Algorithm::Tabu,
            steps: result.iterations,
            best_cost: result.best_cost,
            best_fitness: result.best_fitness,
            optimal: result.optimal,
            primary_count: result.metrics.diversification_count,
            secondary_count: result.metrics.intensification_count,
        });
        Ok(result)
    }
}

/// Scans `moves` in order. The first neighbor meeting the aspiration
/// criterion wins outright; otherwise the lowest-cost non-tabu neighbor
/// (earliest on ties). `None` when every neighbor is tabu.
fn select<F: Objective + ?Sized>(
    objective: &F,
    current: &Solution,
    moves: &[Move],
    tabu: &TabuList,
    best_cost: f64,
    config: &TabuConfig,
) -> Option<(Candidate, Acceptance)> {
    let mut admissible: Option<Candidate> = None;

    for &mv in moves {
        let solution = mv.applied_to(current);
        let cost = objective.cost(&solution);

        if config.aspires(cost, best_cost) {
            return Some((Candidate { mv, solution, cost }, Acceptance::Aspiration));
        }
        if !tabu.contains(&mv) && admissible.as_ref().is_none_or(|c| cost < c.cost) {
            admissible = Some(Candidate { mv, solution, cost });
        }
    }

    admissible.map(|c| (c, Acceptance::Admissible))
}

// ============================================================================
// Tests
// ============================================================================
