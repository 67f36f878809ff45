//! Schema versioning for the key-value database.
//!
//! # Invariants
//! - Steps are listed in strictly increasing `version` order.
//! - All pending steps commit together or not at all.
//! - `PRAGMA user_version` always equals the last committed step.

use crate::storage::{StorageError, StorageResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Highest schema version this binary can open.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in the database.
pub fn schema_version(conn: &Connection) -> StorageResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings the database schema up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the database was written by a newer
///   binary; nothing is modified in that case.
pub fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let from = schema_version(conn)?;
    let to = latest_version();
    if from > to {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }

    let pending = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > from)
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
        info!(
            "event=storage_migrate module=storage status=step version={} name={}",
            step.version, step.name
        );
    }
    tx.commit()?;

    info!(
        "event=storage_migrate module=storage status=ok from_version={from} to_version={to}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SCHEMA_STEPS;

    #[test]
    fn steps_are_strictly_increasing_from_one() {
        let mut expected = 1;
        for step in SCHEMA_STEPS {
            assert_eq!(step.version, expected, "step `{}` out of order", step.name);
            expected += 1;
        }
    }
}
