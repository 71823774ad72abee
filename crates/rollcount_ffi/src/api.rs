//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the attendance screen's use cases to Dart via FRB.
//! - Own the one in-memory attendance session of the process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Status labels are always `present|absent|unmarked`.
//! - Session state lives for the process only; nothing is persisted.

use log::warn;
use rollcount_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AttendanceChange, AttendanceError, AttendanceService, AttendanceSummary, DayKey, Mark,
};
use std::sync::{Mutex, OnceLock, PoisonError};

static SESSION: OnceLock<Mutex<AttendanceService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Result envelope for attendance write calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceActionResponse {
    /// Whether the mark was recorded.
    pub ok: bool,
    /// Day that was marked, when one was.
    pub day_key: Option<i64>,
    /// Resulting status label of `day_key` (`unmarked` on failure).
    pub status: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl AttendanceActionResponse {
    fn success(change: AttendanceChange) -> Self {
        Self {
            ok: true,
            day_key: Some(change.day.as_i64()),
            status: change.current.as_str().to_string(),
            message: format!("Marked {}.", change.current),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            day_key: None,
            status: "unmarked".to_string(),
            message: message.into(),
        }
    }
}

/// Stats card payload, recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummaryResponse {
    /// Present share of marked days, unrounded.
    pub percentage: f64,
    /// Display form, e.g. `66.7%`.
    pub percentage_label: String,
    pub present_count: usize,
    pub absent_count: usize,
    /// Pending calendar selection, if any.
    pub selected_day_key: Option<i64>,
}

/// Marks one day present or absent.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - `status` accepts `present|absent` (case-insensitive).
/// - Never panics; invalid status returns `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_mark(day_key: i64, status: String) -> AttendanceActionResponse {
    match status.parse::<Mark>() {
        Ok(mark) => {
            let change =
                with_session(|session| session.mark_day(DayKey::from_epoch_ms(day_key), mark));
            AttendanceActionResponse::success(change)
        }
        Err(err) => AttendanceActionResponse::failure(format!("attendance_mark failed: {err}")),
    }
}

/// Selects the calendar day targeted by the next confirm.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_select_day(day_key: i64) {
    with_session(|session| session.select_day(DayKey::from_epoch_ms(day_key)));
}

/// Drops the pending calendar selection.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_clear_selection() {
    with_session(AttendanceService::clear_selection);
}

/// Marks the selected day and clears the selection.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; returns `ok = false` without a selection or with an
///   invalid status, leaving state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_confirm(status: String) -> AttendanceActionResponse {
    let result = status
        .parse::<Mark>()
        .and_then(|mark| with_session(|session| session.confirm(mark)));
    match result {
        Ok(change) => AttendanceActionResponse::success(change),
        Err(err) => {
            if err == AttendanceError::NoDaySelected {
                warn!("event=attendance_confirm module=ffi status=error reason=no_selection");
            }
            AttendanceActionResponse::failure(format!("attendance_confirm failed: {err}"))
        }
    }
}

/// Returns `present|absent|unmarked` for one day.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_status(day_key: i64) -> String {
    with_session(|session| session.status(DayKey::from_epoch_ms(day_key)))
        .as_str()
        .to_string()
}

/// Returns statistics over every marked day.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_summary() -> AttendanceSummaryResponse {
    with_session(|session| to_summary_response(session.summary(), session.selected_day()))
}

/// Returns statistics over the marked days of one calendar month.
///
/// Invalid months yield the empty summary.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_month_summary(year: i32, month: u32) -> AttendanceSummaryResponse {
    with_session(|session| {
        let summary = DayKey::month_range(year, month)
            .map(|(start, end)| session.model().summary_between(start, end))
            .unwrap_or_default();
        to_summary_response(summary, session.selected_day())
    })
}

/// Returns the day key the shell should use for a calendar cell.
///
/// Returns `None` for dates that do not exist.
#[flutter_rust_bridge::frb(sync)]
pub fn attendance_day_key(year: i32, month: u32, day: u32) -> Option<i64> {
    DayKey::from_ymd(year, month, day).map(DayKey::as_i64)
}

fn with_session<T>(f: impl FnOnce(&mut AttendanceService) -> T) -> T {
    let session = SESSION.get_or_init(|| Mutex::new(AttendanceService::new()));
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn to_summary_response(
    summary: AttendanceSummary,
    selected_day: Option<DayKey>,
) -> AttendanceSummaryResponse {
    AttendanceSummaryResponse {
        percentage: summary.percentage,
        percentage_label: summary.percentage_label(),
        present_count: summary.present,
        absent_count: summary.absent,
        selected_day_key: selected_day.map(DayKey::as_i64),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        attendance_clear_selection, attendance_confirm, attendance_day_key, attendance_mark,
        attendance_month_summary, attendance_select_day, attendance_status, attendance_summary,
        core_version, init_logging, ping,
    };

    // Tests share one process-wide session: each test uses its own day keys,
    // and only `confirm_flow_marks_selected_day` touches the selection.

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn attendance_mark_records_and_overwrites_status() {
        let day_key = attendance_day_key(2001, 5, 14).expect("valid date");
        assert_eq!(attendance_status(day_key), "unmarked");

        let first = attendance_mark(day_key, "present".to_string());
        assert!(first.ok, "{}", first.message);
        assert_eq!(first.day_key, Some(day_key));
        assert_eq!(attendance_status(day_key), "present");

        let second = attendance_mark(day_key, " Absent ".to_string());
        assert!(second.ok, "{}", second.message);
        assert_eq!(second.status, "absent");
        assert_eq!(attendance_status(day_key), "absent");
    }

    #[test]
    fn attendance_mark_rejects_unknown_and_unmarked_status() {
        let day_key = attendance_day_key(2001, 6, 1).expect("valid date");

        let unknown = attendance_mark(day_key, "late".to_string());
        assert!(!unknown.ok);
        assert!(unknown.message.contains("unsupported attendance status"));

        let unmarked = attendance_mark(day_key, "unmarked".to_string());
        assert!(!unmarked.ok);
        assert_eq!(attendance_status(day_key), "unmarked");
    }

    #[test]
    fn confirm_flow_marks_selected_day() {
        attendance_clear_selection();
        let rejected = attendance_confirm("present".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("no day selected"));

        let day_key = attendance_day_key(2002, 2, 3).expect("valid date");
        attendance_select_day(day_key);
        assert_eq!(attendance_summary().selected_day_key, Some(day_key));

        let invalid = attendance_confirm("maybe".to_string());
        assert!(!invalid.ok);
        assert_eq!(attendance_summary().selected_day_key, Some(day_key));

        let confirmed = attendance_confirm("present".to_string());
        assert!(confirmed.ok, "{}", confirmed.message);
        assert_eq!(confirmed.day_key, Some(day_key));
        assert_eq!(attendance_status(day_key), "present");
        assert_eq!(attendance_summary().selected_day_key, None);
    }

    #[test]
    fn month_summary_counts_only_that_month() {
        let inside = attendance_day_key(1999, 3, 10).expect("valid date");
        let also_inside = attendance_day_key(1999, 3, 31).expect("valid date");
        let outside = attendance_day_key(1999, 4, 1).expect("valid date");
        attendance_mark(inside, "present".to_string());
        attendance_mark(also_inside, "absent".to_string());
        attendance_mark(outside, "absent".to_string());

        let march = attendance_month_summary(1999, 3);
        assert_eq!((march.present_count, march.absent_count), (1, 1));
        assert_eq!(march.percentage_label, "50.0%");

        let invalid = attendance_month_summary(1999, 0);
        assert_eq!(invalid.present_count + invalid.absent_count, 0);
        assert_eq!(invalid.percentage, 0.0);
    }

    #[test]
    fn summary_label_matches_percentage() {
        let day_key = attendance_day_key(2003, 8, 8).expect("valid date");
        attendance_mark(day_key, "present".to_string());

        let summary = attendance_summary();
        assert!(summary.present_count >= 1);
        assert_eq!(
            summary.percentage_label,
            format!("{:.1}%", summary.percentage)
        );
    }

    #[test]
    fn day_key_rejects_invalid_dates() {
        assert_eq!(attendance_day_key(2023, 2, 29), None);
        assert_eq!(attendance_day_key(1970, 1, 1), Some(0));
    }
}
