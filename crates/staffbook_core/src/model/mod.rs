//! Domain model for employee records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the persisted record shape flat and stable.
//!
//! # Invariants
//! - Every record is identified by an `EmployeeId` that never changes.
//! - Department and status values are constrained to fixed enumerations.

pub mod employee;
