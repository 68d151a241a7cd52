//! Unit tests for the key/value state backends.

use std::sync::Arc;

use linemarks::database::Database;
use linemarks::services::state_storage::{MemoryStateStorage, SqliteStateStorage, StateStorage};
use tempfile::TempDir;

#[test]
fn test_memory_storage_returns_default_for_missing_key() {
    let storage = MemoryStateStorage::new();
    assert_eq!(storage.get("bookmarks", "fallback").unwrap(), "fallback");
}

#[test]
fn test_memory_storage_update_overwrites() {
    let mut storage = MemoryStateStorage::new();
    storage.update("bookmarks", "one").unwrap();
    storage.update("bookmarks", "two").unwrap();
    assert_eq!(storage.get("bookmarks", "").unwrap(), "two");
}

#[test]
fn test_sqlite_storage_round_trip() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = SqliteStateStorage::new(db, "/work");

    assert_eq!(storage.get("bookmarks", "").unwrap(), "");
    storage.update("bookmarks", "{\"bookmarks\":[]}").unwrap();
    assert_eq!(storage.get("bookmarks", "").unwrap(), "{\"bookmarks\":[]}");
    assert_eq!(storage.scope(), "/work");
}

#[test]
fn test_sqlite_storage_upsert_keeps_one_row() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = SqliteStateStorage::new(db.clone(), "");

    storage.update("bookmarks", "first").unwrap();
    storage.update("bookmarks", "second").unwrap();

    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM state", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(storage.get("bookmarks", "").unwrap(), "second");
}

#[test]
fn test_sqlite_scopes_are_isolated() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut first = SqliteStateStorage::new(db.clone(), "/a");
    let mut second = SqliteStateStorage::new(db, "/b");

    first.update("bookmarks", "from a").unwrap();
    second.update("bookmarks", "from b").unwrap();

    assert_eq!(first.get("bookmarks", "").unwrap(), "from a");
    assert_eq!(second.get("bookmarks", "").unwrap(), "from b");
}

#[test]
fn test_sqlite_storage_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.db");

    {
        let db = Arc::new(Database::open(&path).unwrap());
        let mut storage = SqliteStateStorage::new(db, "");
        storage.update("bookmarks", "kept").unwrap();
    }

    let db = Arc::new(Database::open(&path).unwrap());
    let storage = SqliteStateStorage::new(db, "");
    assert_eq!(storage.get("bookmarks", "").unwrap(), "kept");
}

#[test]
fn test_storages_behind_trait_object() {
    let mut backends: Vec<Box<dyn StateStorage>> = vec![
        Box::new(MemoryStateStorage::new()),
        Box::new(SqliteStateStorage::new(
            Arc::new(Database::open_in_memory().unwrap()),
            "",
        )),
    ];
    for backend in backends.iter_mut() {
        backend.update("k", "v").unwrap();
        assert_eq!(backend.get("k", "").unwrap(), "v");
        assert_eq!(backend.get("missing", "d").unwrap(), "d");
    }
}
