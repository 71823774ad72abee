//! Attendance state model and statistics engine.
//!
//! # Responsibility
//! - Own the session's day → mark mapping.
//! - Derive percentage and counts from the mapping on demand.
//! - Notify subscribed observers after every mark.
//!
//! # Invariants
//! - `counts().total() == len()` at all times.
//! - `percentage()` is `0.0` for an empty mapping.
//! - `mark` never fails and overwrites any previous mark for the day.

use crate::model::attendance::{AttendanceStatus, DayKey, Mark};
use crate::model::record::AttendanceRecord;
use crate::model::stats::{AttendanceCounts, AttendanceSummary};
use crate::observer::{AttendanceChange, AttendanceObserver, ObserverRegistry, SubscriptionId};
use log::debug;
use std::sync::Arc;

/// Session attendance state with observer notification.
#[derive(Debug, Default)]
pub struct AttendanceModel {
    record: AttendanceRecord,
    observers: ObserverRegistry,
}

impl AttendanceModel {
    /// Creates an empty model with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` for `day`, then notifies observers.
    ///
    /// Re-marking a day with the same status leaves the mapping unchanged,
    /// but observers are still notified.
    pub fn mark(&mut self, day: DayKey, status: Mark) -> AttendanceChange {
        let previous = self.record.insert(day, status);
        let change = AttendanceChange {
            day,
            previous,
            current: status,
        };
        debug!(
            "event=attendance_mark module=model status=ok day_key={} previous={} current={} marked_days={}",
            day,
            previous,
            status,
            self.record.len()
        );
        self.observers.notify(&change);
        change
    }

    /// Share of present days among marked days, in percent.
    pub fn percentage(&self) -> f64 {
        self.counts().percentage()
    }

    /// Present and absent tallies over every marked day.
    pub fn counts(&self) -> AttendanceCounts {
        self.record.counts()
    }

    /// Percentage and counts in one snapshot.
    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_counts(self.counts())
    }

    /// Statistics restricted to the inclusive day range `[start, end]`.
    ///
    /// A reversed range yields the empty summary.
    pub fn summary_between(&self, start: DayKey, end: DayKey) -> AttendanceSummary {
        AttendanceSummary::from_counts(self.record.counts_between(start, end))
    }

    pub fn status(&self, day: DayKey) -> AttendanceStatus {
        self.record.status(day)
    }

    /// Number of marked days.
    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Marked days in ascending key order.
    pub fn marked_days(&self) -> impl Iterator<Item = (DayKey, Mark)> + '_ {
        self.record.iter()
    }

    pub fn record(&self) -> &AttendanceRecord {
        &self.record
    }

    pub fn subscribe(&mut self, observer: Arc<dyn AttendanceObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
