//! Candidate timetables.

use std::collections::{BTreeMap, HashSet};

use super::entry::{Day, ScheduleEntry, ScheduleRecord};

/// A full candidate timetable: one entry per catalog course.
///
/// Position `i` always holds the `i`-th course in catalog traversal order.
/// `Solution` is a value type: `clone()` copies every entry, so two
/// solutions never observe each other's mutations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    entries: Vec<ScheduleEntry>,
}

impl Solution {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [ScheduleEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }

    /// Mutable access to two distinct positions at once.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    pub(crate) fn pair_mut(
        &mut self,
        i: usize,
        j: usize,
    ) -> (&mut ScheduleEntry, &mut ScheduleEntry) {
        assert_ne!(i, j, "pair_mut needs two distinct positions");
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (head, tail) = self.entries.split_at_mut(hi);
        let (a, b) = (&mut head[lo], &mut tail[0]);
        if i < j {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Number of positions whose entries differ from `other`'s.
    ///
    /// Positions beyond the shorter solution count as differing.
    pub fn differing_entries(&self, other: &Solution) -> usize {
        let shared = self
            .entries
            .iter()
            .zip(&other.entries)
            .filter(|(a, b)| a != b)
            .count();
        shared + self.len().abs_diff(other.len())
    }

    /// Flat records in solution order.
    pub fn records(&self) -> Vec<ScheduleRecord> {
        self.entries.iter().map(ScheduleEntry::to_record).collect()
    }

    /// Records grouped by semester number, each group ordered by weekday
    /// and then by start time. This is the sheet layout used for export.
    pub fn records_by_semester(&self) -> BTreeMap<u8, Vec<ScheduleRecord>> {
        let mut groups: BTreeMap<u8, Vec<ScheduleRecord>> = BTreeMap::new();
        for entry in &self.entries {
            groups
                .entry(entry.semester().number())
                .or_default()
                .push(entry.to_record());
        }
        for records in groups.values_mut() {
            records.sort_by_key(|r| (r.day, r.start_minute));
        }
        groups
    }

    /// Entries scheduled on `day`, in solution order.
    pub fn on_day(&self, day: Day) -> impl Iterator<Item = &ScheduleEntry> + '_ {
        self.entries.iter().filter(move |e| e.day() == day)
    }

    /// Headline counts shown next to a rendered timetable.
    pub fn summary(&self) -> ScheduleSummary {
        let rooms: HashSet<&str> = self.entries.iter().map(ScheduleEntry::room).collect();
        let instructors: HashSet<&str> =
            self.entries.iter().map(ScheduleEntry::instructor).collect();
        ScheduleSummary {
            courses: self.entries.len(),
            rooms_used: rooms.len(),
            instructors_used: instructors.len(),
        }
    }
}

impl From<Vec<ScheduleEntry>> for Solution {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        Self::new(entries)
    }
}

/// Headline counts of a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub courses: usize,
    pub rooms_used: usize,
    pub instructors_used: usize,
}
