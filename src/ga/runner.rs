//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → replacement → repeat.

use rand::Rng;

use super::config::GaConfig;
use super::operators::{mutate, one_point_crossover};
use super::selection::tournament;
use super::types::{GaMetrics, GenerationStats, Individual};
use crate::error::{Result, TimetableError};
use crate::generator::random_solution;
use crate::models::{Catalog, Solution};
use crate::observer::{Algorithm, LogObserver, RunSummary, SearchObserver};
use crate::random::rng_from;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best timetable found during the entire run.
    pub best: Solution,

    /// Conflicts in [`best`](Self::best).
    pub best_conflicts: usize,

    /// Normalized fitness of [`best`](Self::best), `1 / (1 + conflicts)`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped on a conflict-free timetable.
    pub optimal: bool,

    /// Per-generation history and operator counters.
    pub metrics: GaMetrics,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::models::Catalog;
///
/// let catalog = Catalog::reference();
/// let config = GaConfig::fast().with_max_generations(5).with_seed(42);
/// let result = GaRunner::run(&catalog, &config).unwrap();
/// assert_eq!(result.best.len(), catalog.course_count());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, reporting progress through [`LogObserver`].
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] if `config` fails validation.
    pub fn run(catalog: &Catalog, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(catalog, config, &mut LogObserver)
    }

    /// Runs the GA, reporting progress to `observer`.
    ///
    /// Each generation:
    /// 1. records best/mean fitness and diversity of the population,
    /// 2. carries the [`elite_count`](GaConfig::elite_count) members with
    ///    the fewest conflicts over unchanged,
    /// 3. fills the rest with tournament-selected, recombined and mutated
    ///    offspring,
    /// 4. replaces the population and keeps the best member seen so far
    ///    (strict improvement only).
    ///
    /// Stops on a conflict-free timetable or after `max_generations`.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        catalog: &Catalog,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult> {
        config.validate().map_err(TimetableError::InvalidConfig)?;

        let mut rng = rng_from(config.seed);

        // 1. Initialize and evaluate population
        let mut population = (0..config.population_size)
            .map(|_| random_solution(catalog, &mut rng).map(Individual::evaluate))
            .collect::<Result<Vec<_>>>()?;

        // 2. Track best
        let mut best = find_best(&population).clone();
        let mut metrics = GaMetrics {
            history: Vec::with_capacity(config.max_generations),
            ..GaMetrics::default()
        };
        let elite_count = config.elite_count();
        let mut generations = 0;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            generations = gen + 1;

            let stats = GenerationStats::observe(gen, &population);
            observer.on_generation(&stats);
            metrics.history.push(stats);

            let next = next_generation(
                catalog,
                config,
                &population,
                elite_count,
                &mut metrics,
                &mut rng,
            )?;
            population = next;

            let gen_best = find_best(&population);
            if gen_best.conflicts < best.conflicts {
                best = gen_best.clone();
            }

            if best.conflicts == 0 {
                break;
            }
        }

        let result = GaResult {
            best_fitness: best.fitness(),
            best_conflicts: best.conflicts,
            optimal: best.conflicts == 0,
            best: best.solution,
            generations,
            metrics,
        };
        observer.on_finish(&RunSummary {
            algorithm: Algorithm::Genetic,
            steps: result.generations,
            best_cost: result.best_conflicts as f64,
            best_fitness: result.best_fitness,
            optimal: result.optimal,
            primary_count: result.metrics.crossover_count,
            secondary_count: result.metrics.mutation_count,
        });
        Ok(result)
    }
}

/// Builds the next population: elites first, then offspring.
fn next_generation<R: Rng>(
    catalog: &Catalog,
    config: &GaConfig,
    population: &[Individual],
    elite_count: usize,
    metrics: &mut GaMetrics,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let size = config.population_size;

    // Elite preservation (stable: earlier members win ties)
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by_key(|&i| population[i].conflicts);
    let mut next: Vec<Individual> = ranked[..elite_count.min(ranked.len())]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    // Generate offspring
    while next.len() < size {
        let p1 = &population[tournament(population, config.tournament_size, rng)];
        let p2 = &population[tournament(population, config.tournament_size, rng)];

        let (c1, c2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            metrics.crossover_count += 1;
            one_point_crossover(&p1.solution, &p2.solution, rng)
        } else {
            (p1.solution.clone(), p2.solution.clone())
        };

        for mut child in [c1, c2] {
            if next.len() >= size {
                break;
            }
            metrics.mutation_count += mutate(&mut child, catalog, config.mutation_rate, rng)?;
            next.push(Individual::evaluate(child));
        }
    }

    Ok(next)
}

/// The member with the fewest conflicts (first on ties).
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .min_by_key(|i| i.conflicts)
        .expect("population size is validated to be at least 1")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogData, CourseRecord};
    use crate::observer::{NoopObserver, RunEvent};

    fn tiny_catalog() -> Catalog {
        Catalog::new(CatalogData {
            semester_2: Some(vec![CourseRecord::new("A", "Alpha", 2, ["Ana"])]),
            semester_4: Some(vec![CourseRecord::new("B", "Beta", 3, ["Budi"])]),
            semester_6: Some(vec![]),
            rooms: vec!["301".into()],
            morning_classes: vec!["1".into()],
            evening_classes: vec!["2".into()],
        })
        .unwrap()
    }

    #[test]
    fn test_reference_catalog_improves() {
        let catalog = Catalog::reference();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(60)
            .with_seed(42);

        let result = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();

        let first = &result.metrics.history[0];
        assert!(
            result.best_conflicts <= first.best_conflicts,
            "best {} regressed from initial {}",
            result.best_conflicts,
            first.best_conflicts
        );
        assert_eq!(result.best.len(), catalog.course_count());
        assert_eq!(result.best_conflicts, crate::fitness::conflict_count(&result.best));
    }

    #[test]
    fn test_tiny_catalog_progress() {
        // Two courses, one room, one instructor each.
        let catalog = tiny_catalog();
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(5)
            .with_seed(7);

        let result = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();
        let first_worst = result.metrics.history[0].worst_conflicts;

        assert!(
            result.best_conflicts < first_worst || result.optimal,
            "no progress: best {} vs first-generation worst {}",
            result.best_conflicts,
            first_worst
        );
    }

    #[test]
    fn test_elitism_keeps_best_non_increasing() {
        let catalog = Catalog::reference();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(40)
            .with_mutation_rate(0.3)
            .with_seed(42);

        let result = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();

        for window in result.metrics.history.windows(2) {
            assert!(
                window[1].best_conflicts <= window[0].best_conflicts,
                "best conflicts should be non-increasing with elitism: {} > {}",
                window[1].best_conflicts,
                window[0].best_conflicts
            );
        }
    }

    #[test]
    fn test_history_length_and_indices() {
        let catalog = Catalog::reference();
        let config = GaConfig::fast().with_max_generations(10).with_seed(3);

        let result = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();

        assert_eq!(result.metrics.history.len(), result.generations);
        for (i, stats) in result.metrics.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
        }
        assert!(result.optimal || result.generations == 10);
    }

    #[test]
    fn test_operator_counters() {
        let catalog = Catalog::reference();
        let always = GaConfig::fast()
            .with_max_generations(3)
            .with_crossover_rate(1.0)
            .with_mutation_rate(1.0)
            .with_seed(5);
        let never = always.clone().with_crossover_rate(0.0).with_mutation_rate(0.0);

        let a = GaRunner::run_with_observer(&catalog, &always, &mut NoopObserver).unwrap();
        let n = GaRunner::run_with_observer(&catalog, &never, &mut NoopObserver).unwrap();

        assert!(a.metrics.crossover_count > 0);
        assert!(a.metrics.mutation_count >= catalog.course_count());
        assert_eq!(n.metrics.crossover_count, 0);
        assert_eq!(n.metrics.mutation_count, 0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let catalog = Catalog::reference();
        let config = GaConfig::fast().with_max_generations(8).with_seed(99);

        let a = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();
        let b = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.metrics, b.metrics);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let catalog = Catalog::reference();
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            GaRunner::run(&catalog, &config),
            Err(TimetableError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_single_member_population() {
        let catalog = Catalog::reference();
        let config = GaConfig::default()
            .with_population_size(1)
            .with_max_generations(3)
            .with_seed(1);
        let result = GaRunner::run_with_observer(&catalog, &config, &mut NoopObserver).unwrap();
        assert_eq!(result.metrics.history[0].diversity, 0.0);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let catalog = Catalog::reference();
        let config = GaConfig::fast().with_max_generations(6).with_seed(17);

        let mut generations = 0;
        let mut finished = 0;
        let result = GaRunner::run_with_observer(&catalog, &config, &mut |event: &RunEvent<'_>| {
            match event {
                RunEvent::Generation(_) => generations += 1,
                RunEvent::Finished(_) => finished += 1,
                RunEvent::Iteration(_) => unreachable!("GA emits no iterations"),
            }
        })
        .unwrap();

        assert_eq!(generations, result.generations);
        assert_eq!(finished, 1);
    }
}
