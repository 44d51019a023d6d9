//! Tabu Search engine.
//!
//! A single timetable is improved by pairwise attribute swaps and
//! per-entry time shifts. Recently accepted moves are held in a
//! fixed-size FIFO tabu list and may not be accepted again unless they
//! meet the aspiration criterion.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: Iteration budget, tabu size, thresholds, jitter
//! - [`TabuRunner`]: Executes the search against any [`Objective`](crate::fitness::Objective)
//! - [`Move`]: Compact move, also the tabu-list key
//! - [`TabuResult`]: Best timetable, its cost, and [`TabuMetrics`]

mod config;
mod neighborhood;
mod runner;
mod types;

pub use config::TabuConfig;
pub use neighborhood::{neighborhood, neighborhood_size};
pub use runner::{TabuResult, TabuRunner};
pub use types::{Acceptance, IterationStats, Move, SwapAttribute, TabuList, TabuMetrics};
