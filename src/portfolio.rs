//! Portfolio run: both engines on the same catalog.
//!
//! The GA evolves its own population; Tabu Search starts from a freshly
//! generated random timetable. With the `parallel` feature the two runs
//! execute on separate rayon tasks, otherwise one after the other.

use crate::error::Result;
use crate::fitness::ConflictObjective;
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::generator::random_solution;
use crate::models::{Catalog, Solution};
use crate::observer::Algorithm;
use crate::random::rng_from;
use crate::tabu::{TabuConfig, TabuResult, TabuRunner};

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct PortfolioResult {
    pub ga: GaResult,
    pub tabu: TabuResult,
    /// Engine with fewer conflicts; the GA on ties.
    pub winner: Algorithm,
}

impl PortfolioResult {
    /// The winning timetable.
    pub fn best(&self) -> &Solution {
        match self.winner {
            Algorithm::Genetic => &self.ga.best,
            Algorithm::Tabu => &self.tabu.best,
        }
    }

    /// Conflicts in the winning timetable.
    pub fn best_conflicts(&self) -> usize {
        match self.winner {
            Algorithm::Genetic => self.ga.best_conflicts,
            Algorithm::Tabu => self.tabu.best_cost as usize,
        }
    }
}

/// Runs the GA and Tabu Search and picks the better timetable.
///
/// The Tabu Search start is drawn with `tabu.seed`, so a seeded config
/// reproduces the whole portfolio.
///
/// # Errors
/// The first configuration error reported by either engine.
pub fn solve(catalog: &Catalog, ga: &GaConfig, tabu: &TabuConfig) -> Result<PortfolioResult> {
    let run_ga = || GaRunner::run(catalog, ga);
    let run_tabu = || -> Result<TabuResult> {
        let initial = random_solution(catalog, &mut rng_from(tabu.seed))?;
        TabuRunner::run(&ConflictObjective, &initial, tabu)
    };

    #[cfg(feature = "parallel")]
    let (ga_result, tabu_result) = rayon::join(run_ga, run_tabu);
    #[cfg(not(feature = "parallel"))]
    let (ga_result, tabu_result) = (run_ga(), run_tabu());

    let ga = ga_result?;
    let tabu = tabu_result?;
    let winner = if tabu.best_cost < ga.best_conflicts as f64 {
        Algorithm::Tabu
    } else {
        Algorithm::Genetic
    };
    Ok(PortfolioResult { ga, tabu, winner })
}
