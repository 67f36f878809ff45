//! Core domain logic for Staffbook, a single-profile employee record manager.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod display;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod routing;
pub mod service;
pub mod storage;

pub use config::{AppConfig, StorageLocation};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{
    Department, Employee, EmployeeId, EmployeePatch, EmployeeStatus, NewEmployee,
    ParseEnumError,
};
pub use query::filter::{
    distinct_departments, filter_employees, DepartmentFilter, EmployeeFilter, StatusFilter,
};
pub use query::stats::{aggregate_counts, recent_hires, EmployeeStats, DEFAULT_RECENT_HIRES};
pub use repo::employee_store::{
    EmployeeStore, IdClock, LoadSource, StoreError, StoreResult, SystemIdClock,
    DEFAULT_STORAGE_KEY,
};
pub use routing::route::{Route, RouteId};
pub use routing::shell::{Screen, Shell, ShellError, View};
pub use service::delete::{delete_with_confirmation, Confirm, DeleteOutcome};
pub use service::form::{
    EmployeeForm, FormError, FormField, FormMode, FormSubmission, FormValues, ValidationError,
};
pub use storage::{
    open_location, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError,
    StorageResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
