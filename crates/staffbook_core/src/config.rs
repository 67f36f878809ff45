//! Runtime configuration shared by the CLI and FFI surfaces.
//!
//! # Invariants
//! - Defaults are usable without any environment: in-memory storage under
//!   the `employees` key, build-mode log level, no log files.

use crate::logging::default_log_level;
use crate::repo::employee_store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DB_PATH_ENV: &str = "STAFFBOOK_DB_PATH";
/// Environment variable naming the log level.
pub const LOG_LEVEL_ENV: &str = "STAFFBOOK_LOG_LEVEL";
/// Environment variable naming the log directory.
pub const LOG_DIR_ENV: &str = "STAFFBOOK_LOG_DIR";
/// Database file name used when only a directory is known.
pub const DEFAULT_DB_FILE_NAME: &str = "staffbook.sqlite3";

/// Where the key-value store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    InMemory,
}

impl StorageLocation {
    /// `staffbook.sqlite3` in the system temp directory.
    ///
    /// Surfaces without an explicit path persist here.
    pub fn default_file() -> Self {
        Self::File(std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageLocation,
    pub storage_key: String,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageLocation::InMemory,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Builds a config from `STAFFBOOK_*` environment variables.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            storage: env_value(DB_PATH_ENV)
                .map(|raw| StorageLocation::File(PathBuf::from(raw)))
                .unwrap_or(defaults.storage),
            storage_key: defaults.storage_key,
            log_level: env_value(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: env_value(LOG_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Path of the database file, or the temp-dir default when in-memory.
    pub fn db_path_or_temp(&self) -> PathBuf {
        match &self.storage {
            StorageLocation::File(path) => path.clone(),
            StorageLocation::InMemory => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
