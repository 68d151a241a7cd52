use serde::{Deserialize, Serialize};

/// Default location of the per-project bookmarks file, relative to a root.
pub const DEFAULT_PROJECT_FILE: &str = ".vscode/bookmarks.json";

/// User-facing options of the bookmarks add-on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookmarkSettings {
    /// Store bookmarks in a file inside each workspace root instead of the
    /// editor's global state.
    pub save_bookmarks_in_project: bool,
    /// Jumping past the last bookmark of a file continues in the next file.
    pub navigate_through_all_files: bool,
    /// When navigation stays inside one file, wrap from the last line back
    /// to the first.
    pub wrap_navigation: bool,
    /// Path of the project file, relative to the workspace root.
    pub project_file: String,
}

impl Default for BookmarkSettings {
    fn default() -> Self {
        Self {
            save_bookmarks_in_project: false,
            navigate_through_all_files: true,
            wrap_navigation: true,
            project_file: DEFAULT_PROJECT_FILE.to_string(),
        }
    }
}
