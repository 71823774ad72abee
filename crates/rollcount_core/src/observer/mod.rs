//! Change notification for attendance consumers.
//!
//! # Responsibility
//! - Define the observer contract called after each recorded mark.
//! - Keep the model decoupled from any UI refresh mechanism.
//!
//! # Invariants
//! - Observers are notified synchronously, after the write is applied.
//! - Notification order follows subscription order.

pub mod registry;

pub use registry::{AttendanceChange, AttendanceObserver, ObserverRegistry, SubscriptionId};
