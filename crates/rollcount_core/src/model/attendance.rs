//! Attendance domain primitives.
//!
//! # Responsibility
//! - Define the three-way attendance status seen by callers.
//! - Define the two-way `Mark` accepted by write paths.
//! - Define `DayKey`, the integer identity of one calendar day.
//!
//! # Invariants
//! - `Unmarked` is never stored; it is the status of any day without a mark.
//! - `DayKey` values are not validated; negative keys are accepted as-is.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Attendance status of one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Day was marked present.
    Present,
    /// Day was marked absent.
    Absent,
    /// Day has no recorded mark.
    #[default]
    Unmarked,
}

impl AttendanceStatus {
    /// Stable lowercase label used by FFI and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unmarked => "unmarked",
        }
    }

    /// Returns whether this status represents a recorded mark.
    pub fn is_marked(self) -> bool {
        !matches!(self, Self::Unmarked)
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a user can record for a day.
///
/// Clearing a mark is not supported, so `Unmarked` has no counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Present,
    Absent,
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        AttendanceStatus::from(self).as_str()
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Mark> for AttendanceStatus {
    fn from(value: Mark) -> Self {
        match value {
            Mark::Present => Self::Present,
            Mark::Absent => Self::Absent,
        }
    }
}

impl TryFrom<AttendanceStatus> for Mark {
    type Error = AttendanceError;

    fn try_from(value: AttendanceStatus) -> Result<Self, Self::Error> {
        match value {
            AttendanceStatus::Present => Ok(Self::Present),
            AttendanceStatus::Absent => Ok(Self::Absent),
            AttendanceStatus::Unmarked => Err(AttendanceError::UnmarkedNotAllowed),
        }
    }
}

impl FromStr for Mark {
    type Err = AttendanceError;

    /// Parses `present` or `absent` (case-insensitive, surrounding whitespace ignored).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "unmarked" => Err(AttendanceError::UnmarkedNotAllowed),
            other => Err(AttendanceError::UnknownStatus(other.to_string())),
        }
    }
}

/// Integer identity of one calendar day.
///
/// The canonical encoding is the Unix epoch millisecond at midnight UTC,
/// matching what the mobile shell derives from a calendar cell. The model
/// only compares keys, so any consistent encoding works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(i64);

impl DayKey {
    /// Wraps a raw key without validation.
    pub const fn from_epoch_ms(value: i64) -> Self {
        Self(value)
    }

    /// Returns the midnight-UTC key of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let epoch_day = i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
        Self(epoch_day * MILLIS_PER_DAY)
    }

    /// Returns the midnight-UTC key of a calendar cell, `None` for invalid dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    /// Returns the inclusive key range covering every millisecond of one month.
    ///
    /// Returns `None` for an invalid month or a year outside chrono's range.
    pub fn month_range(year: i32, month: u32) -> Option<(Self, Self)> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((
            Self::from_date(first),
            Self(Self::from_date(next_first).0 - 1),
        ))
    }

    /// Returns the raw key.
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns the UTC date containing this key.
    ///
    /// Returns `None` when the key falls outside chrono's supported range.
    pub fn to_date(self) -> Option<NaiveDate> {
        let days_from_ce = self.0.div_euclid(MILLIS_PER_DAY) + UNIX_EPOCH_DAYS_FROM_CE;
        let days_from_ce = i32::try_from(days_from_ce).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce)
    }
}

impl From<i64> for DayKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised at the edges of the attendance API.
///
/// Statistics and `mark` itself are total; these cover label parsing and
/// the select-then-confirm workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Status label is not `present` or `absent`.
    UnknownStatus(String),
    /// Caller tried to record `unmarked` as a mark.
    UnmarkedNotAllowed,
    /// Confirm was requested without a selected day.
    NoDaySelected,
}

impl Display for AttendanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus(value) => write!(
                f,
                "unsupported attendance status `{value}`; expected present|absent"
            ),
            Self::UnmarkedNotAllowed => {
                write!(f, "`unmarked` cannot be recorded; clearing a mark is not supported")
            }
            Self::NoDaySelected => write!(f, "no day selected"),
        }
    }
}

impl Error for AttendanceError {}
