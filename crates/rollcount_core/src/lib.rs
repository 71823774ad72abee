//! Core domain logic for Rollcount.
//! This crate is the single source of truth for attendance state and statistics.

pub mod logging;
pub mod model;
pub mod observer;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{AttendanceError, AttendanceStatus, DayKey, Mark};
pub use model::attendance_model::AttendanceModel;
pub use model::record::AttendanceRecord;
pub use model::stats::{AttendanceCounts, AttendanceSummary};
pub use observer::{AttendanceChange, AttendanceObserver, ObserverRegistry, SubscriptionId};
pub use service::attendance_service::AttendanceService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
