//! View controllers.
//!
//! # Responsibility
//! - Turn record-store state into declarative, serializable view models.
//! - Run the add/edit form and the confirm-then-delete flow.
//!
//! # Invariants
//! - Read views never mutate the store.
//! - Every mutation goes through `EmployeeStore`'s API.

use crate::routing::route::Route;
use serde::Serialize;

pub mod dashboard;
pub mod delete;
pub mod detail;
pub mod form;
pub mod header;
pub mod list;

/// Navigation link rendered by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub path: String,
}

impl LinkView {
    pub fn new(label: impl Into<String>, route: &Route) -> Self {
        Self {
            label: label.into(),
            path: route.path(),
        }
    }
}

/// One `<option>` of a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Self {
        let value = value.into();
        let selected = value == current;
        Self {
            value,
            label: label.into(),
            selected,
        }
    }
}
