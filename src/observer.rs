//! Run observation.
//!
//! Engines report progress through an injected [`SearchObserver`] instead
//! of configuring a logger themselves. [`LogObserver`] forwards events to
//! the `log` facade; whatever logger the host installs decides where they
//! go. Any `FnMut(&RunEvent)` closure is also an observer.

use log::{debug, info};

use crate::ga::GenerationStats;
use crate::tabu::IterationStats;

/// Which engine produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Genetic,
    Tabu,
}

/// End-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub algorithm: Algorithm,
    /// Generations (GA) or iterations (TS) executed.
    pub steps: usize,
    /// Objective value of the best solution (conflicts for the GA).
    pub best_cost: f64,
    /// `1 / (1 + best_cost)`.
    pub best_fitness: f64,
    /// Whether the run stopped on a zero-cost solution.
    pub optimal: bool,
    /// Crossovers (GA) or diversification moves (TS).
    pub primary_count: usize,
    /// Mutated entries (GA) or intensification hits (TS).
    pub secondary_count: usize,
}

/// A structured progress event.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    Generation(&'a GenerationStats),
    Iteration(&'a IterationStats),
    Finished(&'a RunSummary),
}

/// Receives progress events from a running engine.
///
/// All hooks default to no-ops.
pub trait SearchObserver {
    /// Called once per GA generation, after its statistics are recorded.
    fn on_generation(&mut self, _stats: &GenerationStats) {}

    /// Called once per TS iteration, after its statistics are recorded.
    fn on_iteration(&mut self, _stats: &IterationStats) {}

    /// Called once when a run ends.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

impl<F> SearchObserver for F
where
    F: FnMut(&RunEvent<'_>),
{
    fn on_generation(&mut self, stats: &GenerationStats) {
        self(&RunEvent::Generation(stats));
    }

    fn on_iteration(&mut self, stats: &IterationStats) {
        self(&RunEvent::Iteration(stats));
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        self(&RunEvent::Finished(summary));
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to the `log` facade.
///
/// Per-step events go to `debug`, the final summary to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_generation(&mut self, stats: &GenerationStats) {
        debug!(
            "generation {}: best_conflicts={} best={:.4} mean={:.4} diversity={:.4}",
            stats.generation,
            stats.best_conflicts,
            stats.best_fitness,
            stats.mean_fitness,
            stats.diversity
        );
    }

    fn on_iteration(&mut self, stats: &IterationStats) {
        debug!(
            "iteration {}: best_cost={} current_cost={} tabu_len={} move={:?} ({:?})",
            stats.iteration,
            stats.best_cost,
            stats.current_cost,
            stats.tabu_len,
            stats.accepted,
            stats.acceptance
        );
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        info!(
            "{:?} search finished after {} steps: best_cost={} best_fitness={:.4} optimal={}",
            summary.algorithm,
            summary.steps,
            summary.best_cost,
            summary.best_fitness,
            summary.optimal
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer_receives_finish() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &RunEvent<'_>| {
                if let RunEvent::Finished(s) = event {
                    seen.push(s.steps);
                }
            };
            observer.on_finish(&RunSummary {
                algorithm: Algorithm::Tabu,
                steps: 3,
                best_cost: 0.0,
                best_fitness: 1.0,
                optimal: true,
                primary_count: 0,
                secondary_count: 0,
            });
        }
        assert_eq!(seen, vec![3]);
    }
}
