use super::bookmark::Bookmark;

/// Change notifications published by the bookmark collection.
///
/// Each variant carries a snapshot of the affected bookmark as it was right
/// after the change. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkEvent {
    Cleared {
        bookmark: Bookmark,
    },
    AllCleared,
    Added {
        bookmark: Bookmark,
        line: u32,
        preview: String,
    },
    Removed {
        bookmark: Bookmark,
        line: u32,
    },
    Updated {
        bookmark: Bookmark,
        index: usize,
        line: u32,
        preview: String,
    },
}

/// Discriminant used to filter subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookmarkEventKind {
    Cleared,
    AllCleared,
    Added,
    Removed,
    Updated,
}

impl BookmarkEvent {
    pub fn kind(&self) -> BookmarkEventKind {
        match self {
            BookmarkEvent::Cleared { .. } => BookmarkEventKind::Cleared,
            BookmarkEvent::AllCleared => BookmarkEventKind::AllCleared,
            BookmarkEvent::Added { .. } => BookmarkEventKind::Added,
            BookmarkEvent::Removed { .. } => BookmarkEventKind::Removed,
            BookmarkEvent::Updated { .. } => BookmarkEventKind::Updated,
        }
    }

    /// The bookmark the event is about, if it concerns a single one.
    pub fn bookmark(&self) -> Option<&Bookmark> {
        match self {
            BookmarkEvent::Cleared { bookmark }
            | BookmarkEvent::Added { bookmark, .. }
            | BookmarkEvent::Removed { bookmark, .. }
            | BookmarkEvent::Updated { bookmark, .. } => Some(bookmark),
            BookmarkEvent::AllCleared => None,
        }
    }
}
