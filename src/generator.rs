//! Random initial solutions.
//!
//! Every attribute is drawn independently and uniformly; no attempt is
//! made to avoid conflicts here. Diversity of starting points is the goal.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Result, TimetableError};
use crate::models::{Catalog, CatalogData, Day, ScheduleEntry, Solution, TimeSlot};

/// Class labels are drawn from this range for every semester.
pub const CLASS_LABELS: RangeInclusive<u8> = 1..=15;

/// Produces random, structurally valid solutions for one catalog.
#[derive(Debug, Clone)]
pub struct SolutionGenerator {
    catalog: Arc<Catalog>,
}

impl SolutionGenerator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Validates raw catalog data and builds a generator over it.
    ///
    /// # Errors
    /// Any [`Catalog::new`] validation error.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        Ok(Self::new(Arc::new(Catalog::new(data)?)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draws one solution; see [`random_solution`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Solution> {
        random_solution(&self.catalog, rng)
    }
}

/// Draws one solution: a day, a standard slot, a room, an eligible
/// instructor and a class label for every course of `catalog`.
///
/// # Errors
/// [`TimetableError::InvalidEntry`] if an entry cannot be built, which
/// only happens if the catalog invariants were bypassed.
pub fn random_solution<R: Rng>(catalog: &Catalog, rng: &mut R) -> Result<Solution> {
    let mut entries = Vec::with_capacity(catalog.course_count());
    for (semester, course) in catalog.courses() {
        let instructor = course.instructors.choose(rng).ok_or_else(|| {
            TimetableError::InvalidEntry(format!("{} has no instructor", course.code))
        })?;
        entries.push(ScheduleEntry::new(
            random_day(rng),
            random_slot(rng),
            Arc::clone(course),
            instructor.as_str(),
            random_room(catalog, rng)?,
            rng.random_range(CLASS_LABELS).to_string(),
            semester,
        )?);
    }
    Ok(Solution::new(entries))
}

pub(crate) fn random_day<R: Rng>(rng: &mut R) -> Day {
    Day::ALL[rng.random_range(0..Day::ALL.len())]
}

pub(crate) fn random_slot<R: Rng>(rng: &mut R) -> TimeSlot {
    TimeSlot::STANDARD[rng.random_range(0..TimeSlot::STANDARD.len())]
}

pub(crate) fn random_room<'a, R: Rng>(catalog: &'a Catalog, rng: &mut R) -> Result<&'a str> {
    catalog
        .rooms()
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| TimetableError::InvalidEntry("room pool is empty".into()))
}
