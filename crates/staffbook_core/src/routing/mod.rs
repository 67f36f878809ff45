//! Navigation shell.
//!
//! # Responsibility
//! - Map URL-like paths onto routes and path parameters.
//! - Own the active route and the per-screen state (list filter, form).
//!
//! # Invariants
//! - `/` always redirects to `/dashboard`.
//! - Rendering an unknown id shows a not-found state, never an error.

pub mod route;
pub mod shell;
