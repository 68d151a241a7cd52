use serde::{Deserialize, Serialize};

/// Direction of a jump through bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpDirection {
    #[default]
    Forward,
    Backward,
}

/// Result of a navigation request.
///
/// Running out of targets is an expected outcome while cycling through files,
/// so it is a value rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpOutcome<T> {
    Found(T),
    NoMoreBookmarks,
}

impl<T> JumpOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            JumpOutcome::Found(value) => Some(value),
            JumpOutcome::NoMoreBookmarks => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, JumpOutcome::NoMoreBookmarks)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> JumpOutcome<U> {
        match self {
            JumpOutcome::Found(value) => JumpOutcome::Found(f(value)),
            JumpOutcome::NoMoreBookmarks => JumpOutcome::NoMoreBookmarks,
        }
    }
}

/// A concrete jump target: a file and a 1-based line in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkPosition {
    pub path: String,
    pub line: u32,
}
