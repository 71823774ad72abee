//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model calls into screen-level use cases.
//! - Keep UI/FFI layers decoupled from model internals.

pub mod attendance_service;
