//! Key/value state storage.
//!
//! The host editor keeps small string values per workspace (or globally).
//! Bookmarks that are not stored inside a project live here as one JSON
//! blob. Two backends: an in-memory map and the SQLite state database.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::types::errors::StorageError;

/// Trait defining the persisted state interface.
pub trait StateStorage {
    /// Returns the value stored under `key`, or `default` when absent.
    fn get(&self, key: &str, default: &str) -> Result<String, StorageError>;
    fn update(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// State held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStorage {
    values: HashMap<String, String>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStateStorage {
    fn get(&self, key: &str, default: &str) -> Result<String, StorageError> {
        Ok(self
            .values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn update(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// State stored in the SQLite state database under one scope.
pub struct SqliteStateStorage {
    db: Arc<Database>,
    scope: String,
}

impl SqliteStateStorage {
    /// Creates a storage view over `db`. Use an empty `scope` for global
    /// state, or a workspace identifier for per-workspace state.
    pub fn new(db: Arc<Database>, scope: &str) -> Self {
        Self {
            db,
            scope: scope.to_string(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl StateStorage for SqliteStateStorage {
    fn get(&self, key: &str, default: &str) -> Result<String, StorageError> {
        let value: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM state WHERE scope = ?1 AND key = ?2",
                params![self.scope, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    fn update(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.db.connection().execute(
            "INSERT INTO state (scope, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(scope, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.scope, key, value, now],
        )?;
        Ok(())
    }
}
