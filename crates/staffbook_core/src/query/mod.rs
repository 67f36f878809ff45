//! Pure derivations over the employee collection.
//!
//! # Responsibility
//! - Compute filtered lists and dashboard aggregates on demand.
//!
//! # Invariants
//! - Functions hold no state and never mutate their input.
//! - Output order is deterministic for a given input order.

pub mod filter;
pub mod stats;
