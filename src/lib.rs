//! University course timetabling by metaheuristic search.
//!
//! A catalog of courses (grouped by semester), lecture rooms and class
//! labels is turned into a weekly timetable that minimizes conflicts:
//! two entries on the same day with intersecting time windows that share
//! a room, an instructor, or a class label within one semester.
//!
//! - **Genetic Algorithm ([`ga`])**: population search with elitism,
//!   tournament selection, one-point crossover and per-entry mutation.
//! - **Tabu Search ([`tabu`])**: single-timetable search over pairwise
//!   swaps and time shifts, with a FIFO tabu list and aspiration.
//! - **Portfolio ([`portfolio`])**: runs both and keeps the better result.
//!
//! # Architecture
//!
//! [`models`] holds the value types ([`Catalog`], [`ScheduleEntry`],
//! [`Solution`]); [`generator`] draws random timetables; [`fitness`]
//! scores them. Engines report progress through an injected
//! [`observer::SearchObserver`] and never configure logging themselves.
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::{GaConfig, GaRunner};
//! use u_timetable::models::Catalog;
//!
//! let catalog = Catalog::reference();
//! let result = GaRunner::run(&catalog, &GaConfig::fast().with_seed(7)).unwrap();
//! for (semester, records) in result.best.records_by_semester() {
//!     assert!(matches!(semester, 2 | 4 | 6));
//!     assert!(!records.is_empty());
//! }
//! ```

pub mod error;
pub mod fitness;
pub mod ga;
pub mod generator;
pub mod models;
pub mod observer;
pub mod portfolio;
pub mod random;
pub mod tabu;

pub use error::{Result, TimetableError, ValidationError, ValidationErrorKind};
pub use models::{Catalog, CatalogData, ScheduleEntry, Solution};
