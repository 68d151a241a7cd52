//! Bookmark folder: the bookmarks that belong to one workspace root.
//!
//! A folder is populated from persisted JSON and serialized back at session
//! boundaries. Project files store paths relative to the root through the
//! [`ROOT_PLACEHOLDER`] token so they stay valid when the project moves.

use tracing::warn;

use crate::types::bookmark::{Bookmark, PersistedBookmarks};
use crate::types::errors::StorageError;
use crate::utils;

/// Token standing in for the workspace root in portable project files.
pub const ROOT_PLACEHOLDER: &str = "$ROOTPATH$";

/// Bookmarks grouped under a single workspace root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFolder {
    root: Option<String>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkFolder {
    /// Creates an empty folder for `root` (`None` when no root is open).
    pub fn new(root: Option<&str>) -> Self {
        Self {
            root: root.map(|r| utils::normalize(utils::strip_trailing_separator(r))),
            bookmarks: Vec::new(),
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Whether `path` falls under this folder's root. A rootless folder
    /// contains nothing; the collection routes unclaimed paths to it.
    pub fn contains(&self, path: &str) -> bool {
        match &self.root {
            Some(root) => utils::root_contains(root, &utils::normalize(path)),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn find(&self, path: &str) -> Option<&Bookmark> {
        let path = utils::normalize(path);
        self.bookmarks.iter().find(|b| b.path == path)
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut Bookmark> {
        let path = utils::normalize(path);
        self.bookmarks.iter_mut().find(|b| b.path == path)
    }

    /// Returns the bookmark for `path`, creating it if needed.
    pub fn add(&mut self, path: &str) -> &mut Bookmark {
        let path = utils::normalize(path);
        let index = match self.bookmarks.iter().position(|b| b.path == path) {
            Some(index) => index,
            None => {
                self.bookmarks.push(Bookmark::new(path));
                self.bookmarks.len() - 1
            }
        };
        &mut self.bookmarks[index]
    }

    /// Empties every bookmark without forgetting the files.
    pub fn clear_all(&mut self) {
        for bookmark in &mut self.bookmarks {
            bookmark.clear();
        }
    }

    /// Merges persisted bookmarks into the folder.
    ///
    /// With `rewrite_relative_paths`, the root placeholder in stored paths is
    /// replaced by this folder's root. Lines already marked are not repeated.
    /// Line 0 is not a valid 1-based line and is skipped.
    pub fn load(&mut self, data: &PersistedBookmarks, rewrite_relative_paths: bool) {
        for entry in &data.bookmarks {
            let path = self.expand_path(&entry.path, rewrite_relative_paths);
            let bookmark = self.add(&path);
            for line in &entry.lines {
                if *line == 0 {
                    warn!(path = %bookmark.path, "skipping saved bookmark on line 0");
                    continue;
                }
                bookmark.add_line(*line);
            }
        }
    }

    /// Parses `json` and merges it in. Blank input is treated as "nothing
    /// saved"; malformed input leaves the folder untouched.
    pub fn load_from_str(
        &mut self,
        json: &str,
        rewrite_relative_paths: bool,
    ) -> Result<(), StorageError> {
        if json.trim().is_empty() {
            return Ok(());
        }
        let data: PersistedBookmarks = serde_json::from_str(json)
            .map_err(|e| StorageError::malformed(self.describe(), e))?;
        self.load(&data, rewrite_relative_paths);
        Ok(())
    }

    /// Snapshot of the non-empty bookmarks, ready to be written out.
    ///
    /// With `rewrite_relative_paths`, a leading root is replaced by the
    /// placeholder so the output can be loaded under a different root.
    pub fn serialize(&self, rewrite_relative_paths: bool) -> PersistedBookmarks {
        let bookmarks = self
            .bookmarks
            .iter()
            .filter(|b| !b.is_empty())
            .map(|b| Bookmark {
                path: self.collapse_path(&b.path, rewrite_relative_paths),
                lines: b.lines.clone(),
            })
            .collect();
        PersistedBookmarks { bookmarks }
    }

    fn expand_path(&self, path: &str, rewrite: bool) -> String {
        match (&self.root, rewrite) {
            (Some(root), true) => path.replacen(ROOT_PLACEHOLDER, root, 1),
            _ => path.to_string(),
        }
    }

    fn collapse_path(&self, path: &str, rewrite: bool) -> String {
        match (&self.root, rewrite) {
            (Some(root), true) if utils::root_contains(root, path) => {
                format!("{}{}", ROOT_PLACEHOLDER, &path[root.len()..])
            }
            _ => path.to_string(),
        }
    }

    fn describe(&self) -> String {
        match &self.root {
            Some(root) => format!("folder {}", root),
            None => "rootless folder".to_string(),
        }
    }
}
