//! Flutter-facing bindings for Staffbook.

pub mod api;
