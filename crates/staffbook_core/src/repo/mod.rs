//! Record store owning the canonical employee collection.
//!
//! # Responsibility
//! - Own the in-memory collection and its persisted blob.
//! - Route every mutation through one exclusive API.
//!
//! # Invariants
//! - Every successful mutation is followed by a full persist.
//! - Callers only ever see the collection through shared borrows.

pub mod employee_store;
pub mod seed;
