//! Flutter-facing bindings for Rollcount core.

pub mod api;
