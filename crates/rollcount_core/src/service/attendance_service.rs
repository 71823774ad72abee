//! Attendance use-case service.
//!
//! # Responsibility
//! - Provide the select-a-day-then-confirm flow used by the calendar screen.
//! - Delegate state and statistics to `AttendanceModel`.
//!
//! # Invariants
//! - `confirm` marks exactly the selected day and then clears the selection.
//! - `confirm` without a selection leaves the model untouched.
//! - Direct `mark_day` calls do not touch the selection.

use crate::model::attendance::{AttendanceError, AttendanceStatus, DayKey, Mark};
use crate::model::attendance_model::AttendanceModel;
use crate::model::stats::AttendanceSummary;
use crate::observer::{AttendanceChange, AttendanceObserver, SubscriptionId};
use log::{debug, info};
use std::sync::Arc;

/// Use-case wrapper pairing the model with the pending day selection.
#[derive(Debug, Default)]
pub struct AttendanceService {
    model: AttendanceModel,
    selected_day: Option<DayKey>,
}

impl AttendanceService {
    /// Creates a service over an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing model.
    pub fn with_model(model: AttendanceModel) -> Self {
        Self {
            model,
            selected_day: None,
        }
    }

    /// Selects `day` as the target of the next confirm, replacing any prior selection.
    pub fn select_day(&mut self, day: DayKey) {
        self.selected_day = Some(day);
        debug!(
            "event=attendance_select module=service status=ok day_key={}",
            day
        );
    }

    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }

    pub fn selected_day(&self) -> Option<DayKey> {
        self.selected_day
    }

    /// Returns whether confirm buttons should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.selected_day.is_some()
    }

    /// Marks the selected day and clears the selection.
    ///
    /// # Errors
    /// - Returns `AttendanceError::NoDaySelected` when no day is selected.
    pub fn confirm(&mut self, mark: Mark) -> Result<AttendanceChange, AttendanceError> {
        let day = self.selected_day.take().ok_or(AttendanceError::NoDaySelected)?;
        let change = self.model.mark(day, mark);
        info!(
            "event=attendance_confirm module=service status=ok day_key={} mark={}",
            day, mark
        );
        Ok(change)
    }

    /// Marks `day` directly, bypassing the selection.
    pub fn mark_day(&mut self, day: DayKey, mark: Mark) -> AttendanceChange {
        self.model.mark(day, mark)
    }

    pub fn status(&self, day: DayKey) -> AttendanceStatus {
        self.model.status(day)
    }

    pub fn summary(&self) -> AttendanceSummary {
        self.model.summary()
    }

    pub fn model(&self) -> &AttendanceModel {
        &self.model
    }

    pub fn subscribe(&mut self, observer: Arc<dyn AttendanceObserver>) -> SubscriptionId {
        self.model.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.model.unsubscribe(id)
    }
}
