//! Genetic Algorithm engine.
//!
//! A population of timetables evolves under elitism, tournament
//! selection, one-point crossover and per-entry mutation. The conflict
//! count is minimized throughout; the normalized fitness
//! `1 / (1 + conflicts)` appears in results and metrics only.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best timetable, its score, and [`GaMetrics`]
//!
//! # Submodules
//!
//! - [`operators`]: One-point crossover and per-entry mutation
//! - [`selection`]: Tournament selection without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{diversity, GaMetrics, GenerationStats, Individual};
