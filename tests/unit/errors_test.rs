use linemarks::types::errors::*;

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::InvalidLine(0).to_string(),
        "Invalid line number: 0"
    );
    assert_eq!(
        BookmarkError::InvalidIndex(7).to_string(),
        "Invalid bookmark index: 7"
    );
    assert_eq!(
        BookmarkError::StaleLine {
            index: 1,
            expected: 10,
            found: 12
        }
        .to_string(),
        "Stale bookmark line at index 1: expected 10, found 12"
    );
}

#[test]
fn bookmark_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(BookmarkError::InvalidIndex(0));
    assert!(err.source().is_none());
}

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::MalformedData {
            source_name: "editor state".to_string(),
            message: "expected value".to_string(),
        }
        .to_string(),
        "Malformed bookmark data in editor state: expected value"
    );
    assert_eq!(
        StorageError::IoError("permission denied".to_string()).to_string(),
        "Bookmark storage I/O error: permission denied"
    );
    assert_eq!(
        StorageError::SerializationError("bad".to_string()).to_string(),
        "Bookmark serialization error: bad"
    );
    assert_eq!(
        StorageError::DatabaseError("locked".to_string()).to_string(),
        "Bookmark state database error: locked"
    );
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StorageError::DatabaseError(_)));
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("invalid json".to_string()).to_string(),
        "Settings serialization error: invalid json"
    );
    assert_eq!(
        SettingsError::InvalidKey("foo".to_string()).to_string(),
        "Invalid settings key: foo"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a bool".to_string()).to_string(),
        "Invalid settings value: not a bool"
    );
}

// === AppError Tests ===

#[test]
fn app_error_is_transparent() {
    let err: AppError = StorageError::IoError("gone".to_string()).into();
    assert_eq!(err.to_string(), "Bookmark storage I/O error: gone");

    let err: AppError = SettingsError::InvalidKey("x".to_string()).into();
    assert_eq!(err.to_string(), "Invalid settings key: x");
}
