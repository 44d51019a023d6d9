//! Population members and per-generation statistics.

use crate::fitness::{conflict_count, fitness_score};
use crate::models::Solution;

/// A solution together with its cached conflict count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub solution: Solution,
    /// Minimization target; lower is better.
    pub conflicts: usize,
}

impl Individual {
    /// Evaluates `solution` and wraps it.
    pub fn evaluate(solution: Solution) -> Self {
        let conflicts = conflict_count(&solution);
        Self {
            solution,
            conflicts,
        }
    }

    /// Normalized fitness `1 / (1 + conflicts)`, for reporting.
    pub fn fitness(&self) -> f64 {
        fitness_score(self.conflicts as f64)
    }
}

/// Statistics recorded at the start of each generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Fewest conflicts in the population.
    pub best_conflicts: usize,
    /// Most conflicts in the population.
    pub worst_conflicts: usize,
    /// Normalized fitness of the best member.
    pub best_fitness: f64,
    /// Mean normalized fitness of the population.
    pub mean_fitness: f64,
    /// Mean pairwise share of differing entries; see [`diversity`].
    pub diversity: f64,
}

impl GenerationStats {
    pub(crate) fn observe(generation: usize, population: &[Individual]) -> Self {
        let best_conflicts = population.iter().map(|i| i.conflicts).min().unwrap_or(0);
        let worst_conflicts = population.iter().map(|i| i.conflicts).max().unwrap_or(0);
        let mean_fitness = if population.is_empty() {
            0.0
        } else {
            population.iter().map(Individual::fitness).sum::<f64>() / population.len() as f64
        };
        Self {
            generation,
            best_conflicts,
            worst_conflicts,
            best_fitness: fitness_score(best_conflicts as f64),
            mean_fitness,
            diversity: diversity(population),
        }
    }
}

/// Population diversity.
///
/// Sums, over every unordered pair of members, the number of positions
/// whose entries differ, then divides by `P · (P − 1) · N` for population
/// size `P` and entry count `N`. Identical populations score `0.0`.
pub fn diversity(population: &[Individual]) -> f64 {
    let p = population.len();
    let n = population.first().map_or(0, |i| i.solution.len());
    if p < 2 || n == 0 {
        return 0.0;
    }
    let mut differing = 0usize;
    for (i, a) in population.iter().enumerate() {
        for b in &population[i + 1..] {
            differing += a.solution.differing_entries(&b.solution);
        }
    }
    differing as f64 / (p * (p - 1) * n) as f64
}

/// Aggregated GA run metrics.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaMetrics {
    /// One record per executed generation.
    pub history: Vec<GenerationStats>,
    /// Parent pairs that were actually recombined.
    pub crossover_count: usize,
    /// Entries changed by mutation.
    pub mutation_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_solution;
    use crate::models::Catalog;
    use crate::random::create_rng;

    fn population(seed: u64, size: usize) -> Vec<Individual> {
        let catalog = Catalog::reference();
        let mut rng = create_rng(seed);
        (0..size)
            .map(|_| Individual::evaluate(random_solution(&catalog, &mut rng).unwrap()))
            .collect()
    }

    #[test]
    fn test_identical_population_has_zero_diversity() {
        let one = population(1, 1).remove(0);
        let same = vec![one.clone(), one.clone(), one];
        assert_eq!(diversity(&same), 0.0);
    }

    #[test]
    fn test_random_population_has_positive_diversity() {
        let d = diversity(&population(2, 6));
        assert!(d > 0.0 && d <= 0.5, "diversity {d} out of expected range");
    }

    #[test]
    fn test_small_population_diversity() {
        assert_eq!(diversity(&[]), 0.0);
        assert_eq!(diversity(&population(3, 1)), 0.0);
    }

    #[test]
    fn test_stats_bounds() {
        let pop = population(4, 10);
        let stats = GenerationStats::observe(0, &pop);
        assert!(stats.best_conflicts <= stats.worst_conflicts);
        assert!(stats.best_fitness > 0.0 && stats.best_fitness <= 1.0);
        assert!(stats.mean_fitness <= stats.best_fitness + 1e-12);
    }
}
