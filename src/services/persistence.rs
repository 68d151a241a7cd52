//! Loading and saving bookmarks at session boundaries.
//!
//! With `save_bookmarks_in_project` on, each rooted folder reads and writes
//! its own project file (paths stored relative to the root). Everything else
//! goes to a single JSON blob in the editor state under [`STATE_KEY`], with
//! absolute paths; on load each blob entry is routed to the folder owning it.
//! A folder that has a project file ignores blob entries, so the blob only
//! acts as the fallback for folders without one.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::managers::bookmark_collection::BookmarkCollection;
use crate::types::bookmark::PersistedBookmarks;
use crate::types::errors::StorageError;
use crate::types::settings::BookmarkSettings;

use super::state_storage::StateStorage;

/// State key of the fallback blob.
pub const STATE_KEY: &str = "bookmarks";

/// Location of the project file for `root`.
pub fn project_file_path(root: &str, settings: &BookmarkSettings) -> PathBuf {
    Path::new(root).join(&settings.project_file)
}

fn parse(json: &str, source_name: &str) -> Result<Option<PersistedBookmarks>, StorageError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(json)
        .map(Some)
        .map_err(|e| StorageError::malformed(source_name, e))
}

/// Loads persisted bookmarks into `collection`.
///
/// Every source is read and parsed before anything is applied, so a
/// malformed file or blob aborts the load with the collection untouched.
/// Returns whether any bookmarks were found.
pub fn load(
    collection: &mut BookmarkCollection,
    storage: &dyn StateStorage,
    settings: &BookmarkSettings,
) -> Result<bool, StorageError> {
    let mut project_data: Vec<(usize, PersistedBookmarks)> = Vec::new();

    if settings.save_bookmarks_in_project {
        for (index, folder) in collection.folders().iter().enumerate() {
            let Some(root) = folder.root() else {
                continue;
            };
            let file = project_file_path(root, settings);
            if !file.exists() {
                continue;
            }
            let content = fs::read_to_string(&file).map_err(|e| {
                StorageError::IoError(format!("Failed to read {}: {}", file.display(), e))
            })?;
            if let Some(data) = parse(&content, &file.display().to_string())? {
                project_data.push((index, data));
            }
        }
    }

    let blob = storage.get(STATE_KEY, "")?;
    let blob_data = parse(&blob, "editor state")?;

    let has_project_file: HashSet<usize> = project_data.iter().map(|(i, _)| *i).collect();
    let mut loaded = 0usize;

    for (index, data) in &project_data {
        loaded += data.bookmarks.len();
        collection.folders_mut()[*index].load(data, true);
    }

    if let Some(data) = blob_data {
        let mut routed: Vec<PersistedBookmarks> =
            vec![PersistedBookmarks::default(); collection.folders().len()];
        for entry in data.bookmarks {
            match collection.owning_folder(&entry.path) {
                Some(index) if has_project_file.contains(&index) => {}
                Some(index) => routed[index].bookmarks.push(entry),
                None => warn!(path = %entry.path, "no workspace folder owns saved bookmark, skipped"),
            }
        }
        for (index, data) in routed.iter().enumerate() {
            loaded += data.bookmarks.len();
            collection.folders_mut()[index].load(data, false);
        }
    }

    info!(
        files = loaded,
        project_files = project_data.len(),
        "bookmarks loaded"
    );
    Ok(loaded > 0)
}

/// Saves `collection`, pruning empty bookmarks.
pub fn save(
    collection: &BookmarkCollection,
    storage: &mut dyn StateStorage,
    settings: &BookmarkSettings,
) -> Result<(), StorageError> {
    let mut blob = PersistedBookmarks::default();

    for folder in collection.folders() {
        match (settings.save_bookmarks_in_project, folder.root()) {
            (true, Some(root)) => {
                write_project_file(&project_file_path(root, settings), &folder.serialize(true))?
            }
            _ => blob.bookmarks.extend(folder.serialize(false).bookmarks),
        }
    }

    let json = serde_json::to_string(&blob)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    storage.update(STATE_KEY, &json)?;
    info!(files = blob.bookmarks.len(), "bookmarks saved to editor state");
    Ok(())
}

/// Writes a project file. An empty folder does not create a new file, but
/// an existing one is rewritten so cleared bookmarks stay cleared.
fn write_project_file(file: &Path, data: &PersistedBookmarks) -> Result<(), StorageError> {
    if data.is_empty() && !file.exists() {
        return Ok(());
    }

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            StorageError::IoError(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    fs::write(file, json)
        .map_err(|e| StorageError::IoError(format!("Failed to write {}: {}", file.display(), e)))?;

    info!(file = %file.display(), files = data.bookmarks.len(), "bookmarks saved to project");
    Ok(())
}
