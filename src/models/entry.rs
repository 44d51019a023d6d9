//! Schedule entries and their time/day vocabulary.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::catalog::Course;
use crate::error::{Result, TimetableError};

/// Minutes in a day; the upper bound for any entry time.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Teaching day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Short English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = TimetableError;

    /// Accepts short and long English names and the catalog's Indonesian
    /// names (`Senin`..`Jumat`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" | "senin" => Ok(Day::Mon),
            "tue" | "tuesday" | "selasa" => Ok(Day::Tue),
            "wed" | "wednesday" | "rabu" => Ok(Day::Wed),
            "thu" | "thursday" | "kamis" => Ok(Day::Thu),
            "fri" | "friday" | "jumat" => Ok(Day::Fri),
            _ => Err(TimetableError::InvalidEntry(format!("unknown day: {s:?}"))),
        }
    }
}

/// Semester tag. Only even semesters are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Semester {
    Second,
    Fourth,
    Sixth,
}

impl Semester {
    /// All semesters in catalog traversal order.
    pub const ALL: [Semester; 3] = [Semester::Second, Semester::Fourth, Semester::Sixth];

    /// Numeric tag (2, 4 or 6).
    pub fn number(self) -> u8 {
        match self {
            Semester::Second => 2,
            Semester::Fourth => 4,
            Semester::Sixth => 6,
        }
    }

    /// Whether sections of this semester are split by class label.
    pub fn has_class_labels(self) -> bool {
        self != Semester::Sixth
    }
}

impl TryFrom<u8> for Semester {
    type Error = TimetableError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            2 => Ok(Semester::Second),
            4 => Ok(Semester::Fourth),
            6 => Ok(Semester::Sixth),
            other => Err(TimetableError::InvalidSemester(other)),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A half-open `[start, end)` window in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    pub start: u16,
    pub end: u16,
}

impl TimeSlot {
    /// The five two-hour teaching slots: 08-10, 10-12, 13-15, 15-17, 17-19.
    pub const STANDARD: [TimeSlot; 5] = [
        TimeSlot::new(8 * 60, 10 * 60),
        TimeSlot::new(10 * 60, 12 * 60),
        TimeSlot::new(13 * 60, 15 * 60),
        TimeSlot::new(15 * 60, 17 * 60),
        TimeSlot::new(17 * 60, 19 * 60),
    ];

    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Half-open interval intersection; touching endpoints do not intersect.
    pub fn intersects(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}

/// One course-day-time-room-instructor-class assignment.
///
/// The course is immutable and shared; every scheduling attribute is
/// owned, so cloning an entry (or a whole [`Solution`](super::Solution))
/// yields a fully independent copy.
///
/// Invariants, checked by [`ScheduleEntry::new`] and preserved by every
/// in-crate mutation: `start < end <= 1440`, and the instructor is one of
/// the course's eligible instructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    day: Day,
    slot: TimeSlot,
    course: Arc<Course>,
    instructor: String,
    room: String,
    class_label: String,
    semester: Semester,
}

impl ScheduleEntry {
    /// Creates a validated entry.
    ///
    /// # Errors
    /// [`TimetableError::InvalidEntry`] if the window is empty or reversed,
    /// ends after midnight, or the instructor is not eligible for the course.
    pub fn new(
        day: Day,
        slot: TimeSlot,
        course: Arc<Course>,
        instructor: impl Into<String>,
        room: impl Into<String>,
        class_label: impl Into<String>,
        semester: Semester,
    ) -> Result<Self> {
        check_window(slot)?;
        let instructor = instructor.into();
        if !course.is_eligible(&instructor) {
            return Err(TimetableError::InvalidEntry(format!(
                "{instructor:?} is not an eligible instructor for {}",
                course.code
            )));
        }
        Ok(Self {
            day,
            slot,
            course,
            instructor,
            room: room.into(),
            class_label: class_label.into(),
            semester,
        })
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    pub fn start(&self) -> u16 {
        self.slot.start
    }

    pub fn end(&self) -> u16 {
        self.slot.end
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn semester(&self) -> Semester {
        self.semester
    }

    /// Length of the session in minutes.
    pub fn duration(&self) -> u16 {
        self.slot.end - self.slot.start
    }

    /// Same day, same room, and intersecting windows.
    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.day == other.day && self.room == other.room && self.slot.intersects(&other.slot)
    }

    /// Whether the two entries cannot both be held as scheduled.
    ///
    /// Requires the same day and intersecting windows, plus one of: the
    /// same room, the same instructor, or the same class label within the
    /// same semester.
    pub fn conflicts_with(&self, other: &ScheduleEntry) -> bool {
        if self.day != other.day || !self.slot.intersects(&other.slot) {
            return false;
        }
        self.room == other.room
            || self.instructor == other.instructor
            || (self.class_label == other.class_label && self.semester == other.semester)
    }

    /// Flattens the entry for rendering and export.
    pub fn to_record(&self) -> ScheduleRecord {
        ScheduleRecord {
            day: self.day,
            start_minute: self.slot.start,
            end_minute: self.slot.end,
            course_code: self.course.code.clone(),
            course_name: self.course.name.clone(),
            instructor: self.instructor.clone(),
            room: self.room.clone(),
            class_label: self.class_label.clone(),
            semester: self.semester.number(),
        }
    }

    pub(crate) fn set_slot(&mut self, slot: TimeSlot) {
        debug_assert!(check_window(slot).is_ok());
        self.slot = slot;
    }

    pub(crate) fn set_day(&mut self, day: Day) {
        self.day = day;
    }

    pub(crate) fn set_room(&mut self, room: &str) {
        room.clone_into(&mut self.room);
    }

    /// Shifts both endpoints by `delta` minutes, clamped to the day.
    ///
    /// Returns `false` and leaves the entry untouched when clamping would
    /// collapse the window.
    pub(crate) fn shift(&mut self, delta: i32) -> bool {
        let clamp = |t: u16| (i32::from(t) + delta).clamp(0, i32::from(MINUTES_PER_DAY)) as u16;
        let moved = TimeSlot::new(clamp(self.slot.start), clamp(self.slot.end));
        if check_window(moved).is_err() {
            return false;
        }
        self.slot = moved;
        true
    }

    pub(crate) fn swap_room(&mut self, other: &mut ScheduleEntry) {
        std::mem::swap(&mut self.room, &mut other.room);
    }

    pub(crate) fn swap_slot(&mut self, other: &mut ScheduleEntry) {
        std::mem::swap(&mut self.slot, &mut other.slot);
    }

    /// Exchanges instructors when each is eligible for the other's course.
    ///
    /// Returns `false` (no change) otherwise.
    pub(crate) fn swap_instructor(&mut self, other: &mut ScheduleEntry) -> bool {
        if !self.course.is_eligible(&other.instructor)
            || !other.course.is_eligible(&self.instructor)
        {
            return false;
        }
        std::mem::swap(&mut self.instructor, &mut other.instructor);
        true
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, Class {}, Semester {}",
            self.day,
            self.slot,
            self.course.name,
            self.instructor,
            self.room,
            self.class_label,
            self.semester
        )
    }
}

fn check_window(slot: TimeSlot) -> Result<()> {
    if slot.start >= slot.end {
        return Err(TimetableError::InvalidEntry(format!(
            "start {} must be before end {}",
            slot.start, slot.end
        )));
    }
    if slot.end > MINUTES_PER_DAY {
        return Err(TimetableError::InvalidEntry(format!(
            "end {} is past {MINUTES_PER_DAY}",
            slot.end
        )));
    }
    Ok(())
}

/// Flat view of a [`ScheduleEntry`] consumed by renderers and exporters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleRecord {
    pub day: Day,
    pub start_minute: u16,
    pub end_minute: u16,
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
    pub room: String,
    pub class_label: String,
    pub semester: u8,
}
