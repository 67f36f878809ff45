//! Employee record store over a key-value storage provider.
//!
//! # Responsibility
//! - Load the collection once, seeding sample data when storage is empty.
//! - Provide create/update/delete/read-by-id over the collection.
//! - Re-serialize the whole collection after every mutation.
//!
//! # Invariants
//! - A malformed stored blob is treated as absent and replaced by seed data.
//! - New ids are unique and greater than every id already in the collection.
//! - Update and delete of unknown ids are no-ops, not errors.
//! - A failed persist rolls the in-memory mutation back.

use crate::model::employee::{Employee, EmployeeId, EmployeePatch, NewEmployee};
use crate::repo::seed::seed_employees;
use crate::storage::{KeyValueStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Storage key used when no other key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "employees";

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store error for persistence failures.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode employee collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Source of candidate ids, in epoch milliseconds.
pub trait IdClock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock id source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdClock;

impl IdClock for SystemIdClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl<F: Fn() -> i64> IdClock for F {
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Where the collection came from when the store was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the stored blob.
    Storage,
    /// Storage held nothing under the key.
    SeededEmpty,
    /// Storage held a blob that failed to decode.
    SeededCorrupt,
}

impl LoadSource {
    fn label(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::SeededEmpty => "seed_empty",
            Self::SeededCorrupt => "seed_corrupt",
        }
    }
}

/// Single owner of the employee collection.
pub struct EmployeeStore<S: KeyValueStore, C: IdClock = SystemIdClock> {
    storage: S,
    key: String,
    clock: C,
    employees: Vec<Employee>,
    load_source: LoadSource,
}

impl<S: KeyValueStore> EmployeeStore<S> {
    /// Loads the collection stored under `key`, using wall-clock ids.
    pub fn load(storage: S, key: impl Into<String>) -> StoreResult<Self> {
        Self::load_with_clock(storage, key, SystemIdClock)
    }
}

impl<S: KeyValueStore, C: IdClock> EmployeeStore<S, C> {
    /// Loads the collection stored under `key` with a caller-provided id clock.
    ///
    /// # Errors
    /// - Returns `StoreError::Storage` when the storage read fails.
    /// - Returns an error when persisting freshly seeded data fails.
    pub fn load_with_clock(storage: S, key: impl Into<String>, clock: C) -> StoreResult<Self> {
        let started_at = Instant::now();
        let key = key.into();

        let (employees, load_source) = match storage.get(&key)? {
            Some(blob) => match serde_json::from_str::<Vec<Employee>>(&blob) {
                Ok(employees) => (employees, LoadSource::Storage),
                Err(err) => {
                    warn!(
                        "event=store_load module=repo status=corrupt key={} error={}",
                        key, err
                    );
                    (seed_employees(), LoadSource::SeededCorrupt)
                }
            },
            None => (seed_employees(), LoadSource::SeededEmpty),
        };

        let mut store = Self {
            storage,
            key,
            clock,
            employees,
            load_source,
        };
        if load_source != LoadSource::Storage {
            store.persist()?;
        }

        store.log_loaded(started_at);
        Ok(store)
    }

    /// Read-only view of the collection in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Finds one record by id.
    pub fn get_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Appends a new active record with a fresh id and persists.
    pub fn add(&mut self, new: NewEmployee) -> StoreResult<Employee> {
        let id = self.next_id();
        let employee = Employee::from_new(id, new);
        self.employees.push(employee.clone());

        if let Err(err) = self.persist() {
            self.employees.pop();
            return Err(err);
        }

        info!(
            "event=employee_add module=repo status=ok id={} count={}",
            id,
            self.employees.len()
        );
        Ok(employee)
    }

    /// Overlays `patch` onto the record with `id` and persists.
    ///
    /// An unknown id leaves the collection unchanged and still persists it.
    pub fn update(&mut self, id: EmployeeId, patch: &EmployeePatch) -> StoreResult<()> {
        let previous = match self.employees.iter_mut().find(|employee| employee.id == id) {
            Some(employee) => {
                let previous = employee.clone();
                employee.apply_patch(patch);
                Some(previous)
            }
            None => None,
        };

        if let Err(err) = self.persist() {
            if let Some(previous) = previous {
                if let Some(slot) = self.employees.iter_mut().find(|employee| employee.id == id) {
                    *slot = previous;
                }
            }
            return Err(err);
        }

        info!(
            "event=employee_update module=repo status={} id={}",
            if previous.is_some() { "ok" } else { "noop" },
            id
        );
        Ok(())
    }

    /// Removes the record with `id` and persists.
    ///
    /// An unknown id leaves the collection unchanged and still persists it.
    pub fn delete(&mut self, id: EmployeeId) -> StoreResult<()> {
        let removed = self
            .employees
            .iter()
            .position(|employee| employee.id == id)
            .map(|index| (index, self.employees.remove(index)));

        if let Err(err) = self.persist() {
            if let Some((index, employee)) = removed {
                self.employees.insert(index, employee);
            }
            return Err(err);
        }

        info!(
            "event=employee_delete module=repo status={} id={} count={}",
            if removed.is_some() { "ok" } else { "noop" },
            id,
            self.employees.len()
        );
        Ok(())
    }

    fn next_id(&self) -> EmployeeId {
        let candidate = self.clock.now_millis();
        match self.employees.iter().map(|employee| employee.id).max() {
            Some(max_id) if candidate <= max_id => max_id.saturating_add(1),
            _ => candidate,
        }
    }

    fn persist(&mut self) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = serde_json::to_string(&self.employees)
            .map_err(StoreError::from)
            .and_then(|blob| {
                self.storage
                    .set(&self.key, &blob)
                    .map_err(StoreError::from)
                    .map(|()| blob.len())
            });

        match result {
            Ok(bytes) => {
                info!(
                    "event=store_persist module=repo status=ok count={} bytes={} duration_ms={}",
                    self.employees.len(),
                    bytes,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_persist module=repo status=error count={} duration_ms={} error={}",
                    self.employees.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn log_loaded(&self, started_at: Instant) {
        info!(
            "event=store_load module=repo status=ok source={} count={} duration_ms={}",
            self.load_source.label(),
            self.employees.len(),
            started_at.elapsed().as_millis()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeStore, LoadSource};
    use crate::repo::seed::seed_employees;
    use crate::storage::{KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult};

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(Some(serde_json::to_string(&seed_employees()).unwrap()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::UnsupportedSchemaVersion {
                db_version: 2,
                latest_supported: 1,
            })
        }
    }

    #[test]
    fn next_id_uses_clock_when_ahead_of_collection() {
        let store = EmployeeStore::load_with_clock(
            MemoryKeyValueStore::new(),
            "employees",
            || 1_700_000_000_000_i64,
        )
        .unwrap();
        assert_eq!(store.next_id(), 1_700_000_000_000);
    }

    #[test]
    fn next_id_bumps_past_existing_ids_when_clock_lags() {
        let store =
            EmployeeStore::load_with_clock(MemoryKeyValueStore::new(), "employees", || 3_i64)
                .unwrap();
        assert_eq!(store.load_source(), LoadSource::SeededEmpty);
        assert_eq!(store.next_id(), 6);
    }

    #[test]
    fn failed_persist_rolls_back_delete() {
        let mut store = EmployeeStore::load(ReadOnlyStore, "employees").unwrap();
        assert_eq!(store.load_source(), LoadSource::Storage);

        assert!(store.delete(1).is_err());
        assert_eq!(store.len(), 5);
        assert_eq!(store.employees()[0].id, 1);
    }
}
