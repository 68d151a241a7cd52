use serde::{Deserialize, Serialize};

use super::navigation::{JumpDirection, JumpOutcome};

/// A bookmarked file and the lines marked in it.
///
/// `lines` keeps the order in which lines were marked and never holds the
/// same line twice. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "fsPath")]
    pub path: String,
    #[serde(rename = "bookmarks")]
    pub lines: Vec<u32>,
}

/// How `Bookmark::update_line` resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpdate {
    Replaced,
    /// The new line was already marked, so the entry at the index was dropped.
    Merged,
}

/// What a toggle did to the active bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineToggle {
    Added,
    Removed,
}

impl Bookmark {
    /// Creates an empty bookmark. `path` must already be normalized.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn has_line(&self, line: u32) -> bool {
        self.lines.contains(&line)
    }

    /// Marks `line`. Returns `false` if it was already marked.
    pub fn add_line(&mut self, line: u32) -> bool {
        if self.has_line(line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Unmarks `line`. Returns `false` if it was not marked.
    pub fn remove_line(&mut self, line: u32) -> bool {
        match self.lines.iter().position(|l| *l == line) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the entry at `index`, returning the line it held.
    pub fn remove_at(&mut self, index: usize) -> Option<u32> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Replaces the line at `index` with `new_line`.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn update_line(&mut self, index: usize, new_line: u32) -> Option<LineUpdate> {
        if index >= self.lines.len() {
            return None;
        }
        match self.lines.iter().position(|l| *l == new_line) {
            Some(existing) if existing != index => {
                self.lines.remove(index);
                Some(LineUpdate::Merged)
            }
            _ => {
                self.lines[index] = new_line;
                Some(LineUpdate::Replaced)
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Marked lines in ascending order.
    pub fn sorted_lines(&self) -> Vec<u32> {
        let mut lines = self.lines.clone();
        lines.sort_unstable();
        lines
    }

    /// The line a jump lands on when entering this file from another one.
    pub fn first_line(&self, direction: JumpDirection) -> Option<u32> {
        match direction {
            JumpDirection::Forward => self.lines.iter().min().copied(),
            JumpDirection::Backward => self.lines.iter().max().copied(),
        }
    }

    /// Finds the nearest marked line after (or before) `current_line`.
    ///
    /// With `wrap`, running off the end continues from the other end of the
    /// file; without it the bookmark reports that it has nothing left.
    pub fn next_line(
        &self,
        current_line: u32,
        direction: JumpDirection,
        wrap: bool,
    ) -> JumpOutcome<u32> {
        let candidate = match direction {
            JumpDirection::Forward => self.lines.iter().filter(|l| **l > current_line).min(),
            JumpDirection::Backward => self.lines.iter().filter(|l| **l < current_line).max(),
        };

        match candidate {
            Some(line) => JumpOutcome::Found(*line),
            None if wrap => match self.first_line(direction) {
                Some(line) => JumpOutcome::Found(line),
                None => JumpOutcome::NoMoreBookmarks,
            },
            None => JumpOutcome::NoMoreBookmarks,
        }
    }
}

/// On-disk layout shared by project files and the global state blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBookmarks {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

impl PersistedBookmarks {
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
