use thiserror::Error;

// === BookmarkError ===

/// Errors related to line-level bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Line numbers are 1-based; zero is rejected.
    #[error("Invalid line number: {0}")]
    InvalidLine(u32),
    /// The provided index is outside the bookmark's line list.
    #[error("Invalid bookmark index: {0}")]
    InvalidIndex(usize),
    /// The line at the given index is not the one the caller expected.
    #[error("Stale bookmark line at index {index}: expected {expected}, found {found}")]
    StaleLine {
        index: usize,
        expected: u32,
        found: u32,
    },
}

// === StorageError ===

/// Errors related to loading and saving persisted bookmarks.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted data is not valid bookmark JSON.
    #[error("Malformed bookmark data in {source_name}: {message}")]
    MalformedData {
        source_name: String,
        message: String,
    },
    /// An I/O error occurred while reading or writing a bookmarks file.
    #[error("Bookmark storage I/O error: {0}")]
    IoError(String),
    /// Failed to serialize bookmarks.
    #[error("Bookmark serialization error: {0}")]
    SerializationError(String),
    /// The state database rejected an operation.
    #[error("Bookmark state database error: {0}")]
    DatabaseError(String),
}

impl StorageError {
    pub(crate) fn malformed(source_name: impl Into<String>, err: serde_json::Error) -> Self {
        StorageError::MalformedData {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::DatabaseError(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === AppError ===

/// Errors surfaced by the session lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
