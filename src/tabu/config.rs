//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// The three thresholds are relative to the best cost seen so far: a
/// cost `c` passes threshold `t` when `c < best_cost × (1 − t)`.
///
/// # Examples
///
/// ```
/// use u_timetable::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_tabu_size(15)
///     .with_aspiration_threshold(0.2);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.tabu_size, 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Iteration budget.
    pub max_iterations: usize,
    /// Capacity of the tabu queue; the oldest move is evicted beyond it.
    pub tabu_size: usize,
    /// A neighbor whose cost beats `best × (1 − aspiration_threshold)` is
    /// accepted at once, tabu or not.
    pub aspiration_threshold: f64,
    /// An accepted cost that does not beat
    /// `best × (1 − diversification_threshold)` marks the iteration as
    /// unproductive in the metrics.
    pub diversification_threshold: f64,
    /// A new best that beats the previous best by this margin counts as an
    /// intensification hit in the metrics.
    pub intensification_threshold: f64,
    /// Largest shift, in minutes, of the per-entry jitter neighbors.
    pub jitter_minutes: u16,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_size: 10,
            aspiration_threshold: 0.1,
            diversification_threshold: 0.8,
            intensification_threshold: 0.9,
            jitter_minutes: 30,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu queue capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the aspiration threshold.
    pub fn with_aspiration_threshold(mut self, t: f64) -> Self {
        self.aspiration_threshold = t.clamp(0.0, 1.0);
        self
    }

    /// Sets the diversification threshold.
    pub fn with_diversification_threshold(mut self, t: f64) -> Self {
        self.diversification_threshold = t.clamp(0.0, 1.0);
        self
    }

    /// Sets the intensification threshold.
    pub fn with_intensification_threshold(mut self, t: f64) -> Self {
        self.intensification_threshold = t.clamp(0.0, 1.0);
        self
    }

    /// Sets the jitter range in minutes.
    pub fn with_jitter_minutes(mut self, minutes: u16) -> Self {
        self.jitter_minutes = minutes;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn aspires(&self, cost: f64, best_cost: f64) -> bool {
        cost < best_cost * (1.0 - self.aspiration_threshold)
    }

    pub(crate) fn intensifies(&self, cost: f64, previous_best: f64) -> bool {
        cost < previous_best * (1.0 - self.intensification_threshold)
    }

    pub(crate) fn is_unproductive(&self, cost: f64, best_cost: f64) -> bool {
        cost >= best_cost * (1.0 - self.diversification_threshold)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.tabu_size == 0 {
            return Err("tabu_size must be at least 1".into());
        }
        for (name, t) in [
            ("aspiration_threshold", self.aspiration_threshold),
            ("diversification_threshold", self.diversification_threshold),
            ("intensification_threshold", self.intensification_threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("{name} must be in [0, 1], got {t}"));
            }
        }
        Ok(())
    }
}
