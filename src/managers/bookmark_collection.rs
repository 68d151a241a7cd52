//! Bookmark collection for linemarks.
//!
//! Implements `BookmarkCollectionTrait`: the editor-facing surface for
//! marking lines, clearing marks and jumping between them across every
//! workspace folder. Changes are published on an [`EventBus`].

use tracing::{debug, warn};

use crate::managers::bookmark_folder::BookmarkFolder;
use crate::services::event_bus::EventBus;
use crate::services::file_probe::{DiskProbe, FileProbe};
use crate::services::persistence;
use crate::services::state_storage::StateStorage;
use crate::types::bookmark::{Bookmark, LineToggle, LineUpdate};
use crate::types::errors::{BookmarkError, StorageError};
use crate::types::events::{BookmarkEvent, BookmarkEventKind};
use crate::types::navigation::{BookmarkPosition, JumpDirection, JumpOutcome};
use crate::types::settings::BookmarkSettings;
use crate::utils;

/// Trait defining bookmark collection operations.
pub trait BookmarkCollectionTrait {
    fn add(&mut self, path: &str) -> Option<&mut Bookmark>;
    fn find(&self, path: &str) -> Option<&Bookmark>;
    fn set_active(&mut self, path: &str) -> Option<&Bookmark>;
    fn active(&self) -> Option<&Bookmark>;
    fn clear_active(&mut self);
    fn clear(&mut self, path: Option<&str>) -> bool;
    fn clear_all(&mut self);
    fn add_line_to_active(&mut self, line: u32, preview: &str) -> Result<bool, BookmarkError>;
    fn remove_line_from_active(&mut self, index: usize, line: u32) -> Result<bool, BookmarkError>;
    fn update_line_on_active(
        &mut self,
        index: usize,
        old_line: u32,
        new_line: u32,
        preview: &str,
    ) -> Result<bool, BookmarkError>;
    fn toggle_line_on_active(
        &mut self,
        line: u32,
        preview: &str,
    ) -> Result<Option<LineToggle>, BookmarkError>;
    fn next_document_with_bookmarks(
        &self,
        active: &str,
        direction: JumpDirection,
    ) -> JumpOutcome<String>;
    fn next_bookmark(
        &self,
        active: &str,
        current_line: u32,
        direction: JumpDirection,
    ) -> JumpOutcome<BookmarkPosition>;
    fn load(
        &mut self,
        storage: &dyn StateStorage,
        settings: &BookmarkSettings,
    ) -> Result<bool, StorageError>;
    fn save(
        &self,
        storage: &mut dyn StateStorage,
        settings: &BookmarkSettings,
    ) -> Result<(), StorageError>;
}

/// Every bookmark of an editor session, grouped by workspace root.
pub struct BookmarkCollection {
    folders: Vec<BookmarkFolder>,
    active: Option<String>,
    events: EventBus,
    probe: Box<dyn FileProbe>,
    navigate_through_all_files: bool,
    wrap_navigation: bool,
}

impl BookmarkCollection {
    /// Creates one folder per workspace root, or a single rootless folder
    /// when no root is open.
    pub fn new(roots: &[&str]) -> Self {
        let folders = if roots.is_empty() {
            vec![BookmarkFolder::new(None)]
        } else {
            roots.iter().map(|r| BookmarkFolder::new(Some(*r))).collect()
        };
        let defaults = BookmarkSettings::default();
        Self {
            folders,
            active: None,
            events: EventBus::new(),
            probe: Box::new(DiskProbe),
            navigate_through_all_files: defaults.navigate_through_all_files,
            wrap_navigation: defaults.wrap_navigation,
        }
    }

    /// Replaces the file-existence check used during navigation.
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Applies the navigation options from `settings`.
    pub fn configure(&mut self, settings: &BookmarkSettings) {
        self.navigate_through_all_files = settings.navigate_through_all_files;
        self.wrap_navigation = settings.wrap_navigation;
    }

    pub fn folders(&self) -> &[BookmarkFolder] {
        &self.folders
    }

    pub fn folders_mut(&mut self) -> &mut [BookmarkFolder] {
        &mut self.folders
    }

    /// Adds a folder for another workspace root (or a rootless catch-all).
    pub fn add_folder(&mut self, root: Option<&str>) {
        self.folders.push(BookmarkFolder::new(root));
    }

    /// All bookmarks, folder by folder, in insertion order.
    pub fn bookmarks(&self) -> Vec<&Bookmark> {
        self.folders.iter().flat_map(|f| f.iter()).collect()
    }

    /// Every marked line in the collection, each file's lines ascending.
    pub fn positions(&self) -> Vec<BookmarkPosition> {
        self.bookmarks()
            .into_iter()
            .flat_map(|b| {
                b.sorted_lines().into_iter().map(|line| BookmarkPosition {
                    path: b.path.clone(),
                    line,
                })
            })
            .collect()
    }

    /// Index of the folder that owns `path`: the one with the longest root
    /// containing it, else the first rootless folder.
    pub fn owning_folder(&self, path: &str) -> Option<usize> {
        let path = utils::normalize(path);
        self.folders
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(&path))
            .max_by_key(|(_, f)| f.root().map_or(0, str::len))
            .map(|(i, _)| i)
            .or_else(|| self.folders.iter().position(|f| f.root().is_none()))
    }

    pub fn subscribe<F>(&mut self, kind: Option<BookmarkEventKind>, handler: F) -> String
    where
        F: FnMut(&BookmarkEvent) + 'static,
    {
        self.events.subscribe(kind, handler)
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn unsubscribe(&mut self, id: &str) -> bool {
        self.events.unsubscribe(id)
    }

    fn find_mut(&mut self, path: &str) -> Option<&mut Bookmark> {
        self.folders.iter_mut().find_map(|f| f.find_mut(path))
    }

    fn active_mut(&mut self) -> Option<&mut Bookmark> {
        let key = self.active.clone()?;
        self.find_mut(&key)
    }

    fn flat_index(flat: &[&Bookmark], path: &str) -> Option<usize> {
        let path = utils::normalize(path);
        flat.iter().position(|b| b.path == path)
    }

    /// Index reached after `step` moves from `start`. Without a start the
    /// walk begins just outside the list, so `n` steps cover it exactly once.
    fn step_index(start: Option<usize>, step: usize, n: usize, direction: JumpDirection) -> usize {
        match (start, direction) {
            (Some(s), JumpDirection::Forward) => (s + step) % n,
            (Some(s), JumpDirection::Backward) => (s + n - step % n) % n,
            (None, JumpDirection::Forward) => (step - 1) % n,
            (None, JumpDirection::Backward) => n - 1 - (step - 1) % n,
        }
    }

    fn is_navigable(&self, bookmark: &Bookmark) -> bool {
        if bookmark.is_empty() {
            return false;
        }
        if !self.probe.exists(&bookmark.path) {
            debug!(path = %bookmark.path, "skipping bookmarked file that no longer exists");
            return false;
        }
        true
    }
}

impl BookmarkCollectionTrait for BookmarkCollection {
    /// Returns the bookmark for `path`, creating it in the owning folder.
    ///
    /// A path no folder claims is dropped and `None` is returned.
    fn add(&mut self, path: &str) -> Option<&mut Bookmark> {
        let path = utils::normalize(path);
        if let Some(index) = self.folders.iter().position(|f| f.find(&path).is_some()) {
            return self.folders[index].find_mut(&path);
        }
        match self.owning_folder(&path) {
            Some(index) => Some(self.folders[index].add(&path)),
            None => {
                warn!(%path, "no workspace folder owns this file, bookmark dropped");
                None
            }
        }
    }

    fn find(&self, path: &str) -> Option<&Bookmark> {
        self.folders.iter().find_map(|f| f.find(path))
    }

    /// Makes `path` the target of line-level operations, adding it if needed.
    fn set_active(&mut self, path: &str) -> Option<&Bookmark> {
        let key = self.add(path)?.path.clone();
        self.active = Some(key);
        self.active()
    }

    fn active(&self) -> Option<&Bookmark> {
        self.active.as_deref().and_then(|key| self.find(key))
    }

    fn clear_active(&mut self) {
        self.active = None;
    }

    /// Clears the given bookmark, or the active one when `path` is `None`.
    fn clear(&mut self, path: Option<&str>) -> bool {
        let key = match path {
            Some(p) => utils::normalize(p),
            None => match &self.active {
                Some(active) => active.clone(),
                None => return false,
            },
        };
        let snapshot = match self.find_mut(&key) {
            Some(bookmark) => {
                bookmark.clear();
                bookmark.clone()
            }
            None => return false,
        };
        self.events.publish(BookmarkEvent::Cleared { bookmark: snapshot });
        true
    }

    fn clear_all(&mut self) {
        for folder in &mut self.folders {
            folder.clear_all();
        }
        self.events.publish(BookmarkEvent::AllCleared);
    }

    fn add_line_to_active(&mut self, line: u32, preview: &str) -> Result<bool, BookmarkError> {
        if line == 0 {
            return Err(BookmarkError::InvalidLine(line));
        }
        let Some(bookmark) = self.active_mut() else {
            return Ok(false);
        };
        if !bookmark.add_line(line) {
            return Ok(false);
        }
        let snapshot = bookmark.clone();
        self.events.publish(BookmarkEvent::Added {
            bookmark: snapshot,
            line,
            preview: preview.to_string(),
        });
        Ok(true)
    }

    fn remove_line_from_active(&mut self, index: usize, line: u32) -> Result<bool, BookmarkError> {
        let Some(bookmark) = self.active_mut() else {
            return Ok(false);
        };
        let found = *bookmark
            .lines
            .get(index)
            .ok_or(BookmarkError::InvalidIndex(index))?;
        if found != line {
            return Err(BookmarkError::StaleLine {
                index,
                expected: line,
                found,
            });
        }
        bookmark.remove_at(index);
        let snapshot = bookmark.clone();
        self.events.publish(BookmarkEvent::Removed {
            bookmark: snapshot,
            line,
        });
        Ok(true)
    }

    /// Moves a mark, typically after lines were inserted or deleted above it.
    ///
    /// Moving onto a line that is already marked merges the two marks and is
    /// reported as a removal of `old_line`.
    fn update_line_on_active(
        &mut self,
        index: usize,
        old_line: u32,
        new_line: u32,
        preview: &str,
    ) -> Result<bool, BookmarkError> {
        if new_line == 0 {
            return Err(BookmarkError::InvalidLine(new_line));
        }
        let Some(bookmark) = self.active_mut() else {
            return Ok(false);
        };
        let found = *bookmark
            .lines
            .get(index)
            .ok_or(BookmarkError::InvalidIndex(index))?;
        if found != old_line {
            return Err(BookmarkError::StaleLine {
                index,
                expected: old_line,
                found,
            });
        }
        let update = bookmark.update_line(index, new_line);
        let snapshot = bookmark.clone();
        let event = match update {
            Some(LineUpdate::Replaced) => BookmarkEvent::Updated {
                bookmark: snapshot,
                index,
                line: new_line,
                preview: preview.to_string(),
            },
            Some(LineUpdate::Merged) => BookmarkEvent::Removed {
                bookmark: snapshot,
                line: old_line,
            },
            None => return Err(BookmarkError::InvalidIndex(index)),
        };
        self.events.publish(event);
        Ok(true)
    }

    fn toggle_line_on_active(
        &mut self,
        line: u32,
        preview: &str,
    ) -> Result<Option<LineToggle>, BookmarkError> {
        if line == 0 {
            return Err(BookmarkError::InvalidLine(line));
        }
        let existing = match self.active() {
            Some(bookmark) => bookmark.lines.iter().position(|l| *l == line),
            None => return Ok(None),
        };
        match existing {
            Some(index) => {
                self.remove_line_from_active(index, line)?;
                Ok(Some(LineToggle::Removed))
            }
            None => {
                self.add_line_to_active(line, preview)?;
                Ok(Some(LineToggle::Added))
            }
        }
    }

    /// Finds the next file, in either direction, that still has marks and
    /// still exists. The scan wraps around and considers `active` itself
    /// last, so a single valid file is found again rather than reported as
    /// exhausted.
    fn next_document_with_bookmarks(
        &self,
        active: &str,
        direction: JumpDirection,
    ) -> JumpOutcome<String> {
        let flat = self.bookmarks();
        let n = flat.len();
        let start = Self::flat_index(&flat, active);

        for step in 1..=n {
            let candidate = flat[Self::step_index(start, step, n, direction)];
            if self.is_navigable(candidate) {
                return JumpOutcome::Found(candidate.path.clone());
            }
        }
        debug!(%active, ?direction, "no document with bookmarks left");
        JumpOutcome::NoMoreBookmarks
    }

    /// Finds the next marked line after `current_line`.
    ///
    /// When `active` has nothing further and navigation spans all files, the
    /// jump continues into the next navigable file (its first line going
    /// forward, its last line going backward). Coming all the way around
    /// lands back inside `active`, wrapping.
    fn next_bookmark(
        &self,
        active: &str,
        current_line: u32,
        direction: JumpDirection,
    ) -> JumpOutcome<BookmarkPosition> {
        let flat = self.bookmarks();
        let n = flat.len();
        let start = Self::flat_index(&flat, active);

        if let Some(index) = start {
            let bookmark = flat[index];
            let at = |line: u32| BookmarkPosition {
                path: bookmark.path.clone(),
                line,
            };
            if !self.navigate_through_all_files {
                return bookmark
                    .next_line(current_line, direction, self.wrap_navigation)
                    .map(at);
            }
            if let JumpOutcome::Found(line) = bookmark.next_line(current_line, direction, false) {
                return JumpOutcome::Found(at(line));
            }
        } else if !self.navigate_through_all_files {
            return JumpOutcome::NoMoreBookmarks;
        }

        for step in 1..=n {
            let candidate = flat[Self::step_index(start, step, n, direction)];
            if start.is_some() && step == n {
                // Back where we started: wrap inside the active file.
                return candidate.next_line(current_line, direction, true).map(|line| {
                    BookmarkPosition {
                        path: candidate.path.clone(),
                        line,
                    }
                });
            }
            if !self.is_navigable(candidate) {
                continue;
            }
            if let Some(line) = candidate.first_line(direction) {
                return JumpOutcome::Found(BookmarkPosition {
                    path: candidate.path.clone(),
                    line,
                });
            }
        }
        debug!(%active, current_line, ?direction, "no more bookmarks");
        JumpOutcome::NoMoreBookmarks
    }

    fn load(
        &mut self,
        storage: &dyn StateStorage,
        settings: &BookmarkSettings,
    ) -> Result<bool, StorageError> {
        persistence::load(self, storage, settings)
    }

    /// Writes every non-empty bookmark out. Empty bookmarks are pruned.
    fn save(
        &self,
        storage: &mut dyn StateStorage,
        settings: &BookmarkSettings,
    ) -> Result<(), StorageError> {
        persistence::save(self, storage, settings)
    }
}
