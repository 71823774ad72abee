//! Attendance domain model.
//!
//! # Responsibility
//! - Define canonical attendance types shared by core, FFI and CLI.
//! - Hold the session mapping and derive statistics from it.
//!
//! # Invariants
//! - A day absent from the mapping is `Unmarked`; `Unmarked` is never stored.
//! - Statistics are recomputed from the mapping, never cached.

pub mod attendance;
pub mod attendance_model;
pub mod record;
pub mod stats;
