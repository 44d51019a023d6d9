//! Timetabling domain model.
//!
//! - [`Catalog`]: validated, read-only course catalog
//! - [`ScheduleEntry`]: one course-day-time-room-instructor-class assignment
//! - [`Solution`]: one entry per catalog course, in traversal order

mod catalog;
mod entry;
mod solution;

pub use catalog::{Catalog, CatalogData, Course, CourseRecord};
pub use entry::{Day, ScheduleEntry, ScheduleRecord, Semester, TimeSlot, MINUTES_PER_DAY};
pub use solution::{ScheduleSummary, Solution};
