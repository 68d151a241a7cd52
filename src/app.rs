//! App Core for linemarks.
//!
//! One editor session: settings, the state storage and the bookmark
//! collection, with the load-on-startup / save-on-shutdown lifecycle.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::database::Database;
use crate::managers::bookmark_collection::{BookmarkCollection, BookmarkCollectionTrait};
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::state_storage::{SqliteStateStorage, StateStorage};
use crate::types::errors::{AppError, StorageError};

/// Central struct for an editor session.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub storage: Box<dyn StateStorage>,
    pub collection: BookmarkCollection,
}

impl App {
    pub fn new(
        collection: BookmarkCollection,
        settings_engine: SettingsEngine,
        storage: Box<dyn StateStorage>,
    ) -> Self {
        Self {
            settings_engine,
            storage,
            collection,
        }
    }

    /// Opens a session for `roots` backed by the SQLite state database.
    ///
    /// `db_path` defaults to `state.db` in the platform data directory. State
    /// is scoped to the set of roots, so each workspace keeps its own blob.
    pub fn open(
        roots: &[&str],
        db_path: Option<&Path>,
        settings_path: Option<String>,
    ) -> Result<Self, AppError> {
        let db = match db_path {
            Some(path) => Database::open(path).map_err(StorageError::from)?,
            None => {
                let dir = platform::get_data_dir();
                fs::create_dir_all(&dir).map_err(|e| {
                    StorageError::IoError(format!("Failed to create {}: {}", dir.display(), e))
                })?;
                Database::open(dir.join("state.db")).map_err(StorageError::from)?
            }
        };
        let storage = SqliteStateStorage::new(Arc::new(db), &roots.join("|"));

        Ok(Self::new(
            BookmarkCollection::new(roots),
            SettingsEngine::new(settings_path),
            Box::new(storage),
        ))
    }

    /// Startup sequence: load settings, apply them, load bookmarks.
    ///
    /// Returns whether any saved bookmarks were found. Malformed saved data
    /// is returned as an error for the host to show; nothing is loaded then.
    pub fn startup(&mut self) -> Result<bool, AppError> {
        let settings = self.settings_engine.load()?;
        self.collection.configure(&settings);
        let loaded = self.collection.load(&*self.storage, &settings)?;
        tracing::info!(loaded, "bookmark session started");
        Ok(loaded)
    }

    /// Shutdown sequence: persist bookmarks.
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        let settings = self.settings_engine.get_settings().clone();
        self.collection.save(&mut *self.storage, &settings)?;
        Ok(())
    }
}
