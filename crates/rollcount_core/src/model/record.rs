//! In-memory day → mark mapping.
//!
//! # Responsibility
//! - Store recorded marks keyed by `DayKey`.
//! - Provide counting scans used by statistics.
//!
//! # Invariants
//! - Stored values are `Mark`, so a stored day is never `Unmarked`.
//! - Writing a day overwrites its previous mark (last writer wins).
//! - Iteration is ascending by day key; insertion order is not kept.

use crate::model::attendance::{AttendanceStatus, DayKey, Mark};
use crate::model::stats::AttendanceCounts;
use std::collections::BTreeMap;

/// Session-scoped attendance mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceRecord {
    entries: BTreeMap<DayKey, Mark>,
}

impl AttendanceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `mark` for `day` and returns the day's previous status.
    pub fn insert(&mut self, day: DayKey, mark: Mark) -> AttendanceStatus {
        self.entries
            .insert(day, mark)
            .map(AttendanceStatus::from)
            .unwrap_or(AttendanceStatus::Unmarked)
    }

    /// Returns the status of `day`, `Unmarked` when no mark exists.
    pub fn status(&self, day: DayKey) -> AttendanceStatus {
        self.entries
            .get(&day)
            .copied()
            .map(AttendanceStatus::from)
            .unwrap_or(AttendanceStatus::Unmarked)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates marked days in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, Mark)> + '_ {
        self.entries.iter().map(|(day, mark)| (*day, *mark))
    }

    /// Counts marks across every recorded day.
    pub fn counts(&self) -> AttendanceCounts {
        tally(self.entries.values().copied())
    }

    /// Counts marks for days in the inclusive range `[start, end]`.
    ///
    /// Returns empty counts when `start > end`.
    pub fn counts_between(&self, start: DayKey, end: DayKey) -> AttendanceCounts {
        if start > end {
            return AttendanceCounts::default();
        }
        tally(self.entries.range(start..=end).map(|(_, mark)| *mark))
    }
}

fn tally(marks: impl Iterator<Item = Mark>) -> AttendanceCounts {
    marks.fold(AttendanceCounts::default(), |mut counts, mark| {
        match mark {
            Mark::Present => counts.present += 1,
            Mark::Absent => counts.absent += 1,
        }
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::AttendanceRecord;
    use crate::model::attendance::{AttendanceStatus, DayKey, Mark};

    fn day(value: i64) -> DayKey {
        DayKey::from_epoch_ms(value)
    }

    #[test]
    fn insert_returns_previous_status() {
        let mut record = AttendanceRecord::new();
        assert_eq!(
            record.insert(day(1), Mark::Present),
            AttendanceStatus::Unmarked
        );
        assert_eq!(
            record.insert(day(1), Mark::Absent),
            AttendanceStatus::Present
        );
        assert_eq!(record.status(day(1)), AttendanceStatus::Absent);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn missing_day_is_unmarked() {
        let record = AttendanceRecord::new();
        assert_eq!(record.status(day(42)), AttendanceStatus::Unmarked);
        assert!(record.is_empty());
    }

    #[test]
    fn iter_is_sorted_by_day_key() {
        let mut record = AttendanceRecord::new();
        record.insert(day(30), Mark::Absent);
        record.insert(day(-5), Mark::Present);
        record.insert(day(10), Mark::Present);

        let days: Vec<i64> = record.iter().map(|(key, _)| key.as_i64()).collect();
        assert_eq!(days, vec![-5, 10, 30]);
    }

    #[test]
    fn counts_between_is_inclusive_and_handles_reversed_range() {
        let mut record = AttendanceRecord::new();
        record.insert(day(1), Mark::Present);
        record.insert(day(2), Mark::Absent);
        record.insert(day(3), Mark::Present);
        record.insert(day(9), Mark::Absent);

        let counts = record.counts_between(day(1), day(3));
        assert_eq!((counts.present, counts.absent), (2, 1));

        let reversed = record.counts_between(day(3), day(1));
        assert_eq!(reversed.total(), 0);
    }
}
