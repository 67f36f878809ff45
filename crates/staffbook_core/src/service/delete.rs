//! Confirm-then-delete flow shared by the list and detail views.
//!
//! # Invariants
//! - The store is touched only after the confirmer answers `true`.
//! - A declined confirmation or an unknown id is a no-op, not an error.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_store::{EmployeeStore, IdClock, StoreResult};
use crate::storage::KeyValueStore;
use log::info;
use serde::Serialize;

/// Blocking yes/no confirmation provided by the UI.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

pub fn confirmation_prompt(employee: &Employee) -> String {
    format!("Are you sure you want to delete {}?", employee.full_name())
}

/// Asks for confirmation and deletes the record when granted.
pub fn delete_with_confirmation<S: KeyValueStore, C: IdClock>(
    store: &mut EmployeeStore<S, C>,
    id: EmployeeId,
    confirmer: &mut impl Confirm,
) -> StoreResult<DeleteOutcome> {
    let Some(employee) = store.get_by_id(id) else {
        return Ok(DeleteOutcome::NotFound);
    };

    if !confirmer.confirm(&confirmation_prompt(employee)) {
        info!("event=employee_delete module=service status=declined id={id}");
        return Ok(DeleteOutcome::Declined);
    }

    store.delete(id)?;
    Ok(DeleteOutcome::Deleted)
}
