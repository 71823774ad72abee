//! Derived attendance statistics.
//!
//! # Invariants
//! - `present + absent` equals the number of marked days scanned.
//! - Percentage is relative to marked days only, and is `0.0` when none.

use serde::{Deserialize, Serialize};

/// Present/absent tallies over a set of marked days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceCounts {
    /// Number of marked days behind these counts.
    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    /// Share of present days, in percent.
    ///
    /// Returns `0.0` when no day is marked.
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.present as f64 / total as f64) * 100.0
    }
}

/// Render-ready statistics snapshot for the stats card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Present share in percent, unrounded.
    pub percentage: f64,
    pub present: usize,
    pub absent: usize,
}

impl AttendanceSummary {
    pub fn from_counts(counts: AttendanceCounts) -> Self {
        Self {
            percentage: counts.percentage(),
            present: counts.present,
            absent: counts.absent,
        }
    }

    pub fn counts(&self) -> AttendanceCounts {
        AttendanceCounts {
            present: self.present,
            absent: self.absent,
        }
    }

    /// Percentage rounded to one decimal with a `%` suffix, e.g. `66.7%`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

impl From<AttendanceCounts> for AttendanceSummary {
    fn from(value: AttendanceCounts) -> Self {
        Self::from_counts(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttendanceCounts, AttendanceSummary};

    #[test]
    fn empty_counts_have_zero_percentage() {
        let counts = AttendanceCounts::default();
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.percentage(), 0.0);
        assert_eq!(AttendanceSummary::default().percentage_label(), "0.0%");
    }

    #[test]
    fn percentage_uses_marked_days_as_denominator() {
        let counts = AttendanceCounts {
            present: 2,
            absent: 1,
        };
        assert!((counts.percentage() - 200.0 / 3.0).abs() < 1e-9);

        let summary = AttendanceSummary::from(counts);
        assert_eq!(summary.percentage_label(), "66.7%");
        assert_eq!(summary.counts(), counts);
    }

    #[test]
    fn all_present_is_one_hundred_percent() {
        let counts = AttendanceCounts {
            present: 4,
            absent: 0,
        };
        assert_eq!(counts.percentage(), 100.0);
    }
}
