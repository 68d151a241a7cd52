//! Unit tests for BookmarkFolder: identity, load/serialize and the root
//! placeholder rewriting used by project files.

use linemarks::managers::bookmark_folder::{BookmarkFolder, ROOT_PLACEHOLDER};
use linemarks::types::bookmark::{Bookmark, PersistedBookmarks};
use linemarks::types::errors::StorageError;

fn persisted(entries: &[(&str, &[u32])]) -> PersistedBookmarks {
    PersistedBookmarks {
        bookmarks: entries
            .iter()
            .map(|(path, lines)| Bookmark {
                path: path.to_string(),
                lines: lines.to_vec(),
            })
            .collect(),
    }
}

#[test]
fn test_add_is_idempotent_across_equivalent_paths() {
    let mut folder = BookmarkFolder::new(Some("/work"));
    folder.add("///work/a.rs").add_line(3);
    folder.add("/work/a.rs").add_line(4);

    assert_eq!(folder.bookmark_count(), 1);
    assert_eq!(folder.find("///work/a.rs").unwrap().lines, vec![3, 4]);
}

#[test]
fn test_find_unknown_path_is_absent() {
    let folder = BookmarkFolder::new(None);
    assert!(folder.find("/nowhere.rs").is_none());
}

#[test]
fn test_load_from_empty_string_does_nothing() {
    let mut folder = BookmarkFolder::new(None);
    folder.load_from_str("", false).unwrap();
    folder.load_from_str("   \n", false).unwrap();
    assert_eq!(folder.bookmark_count(), 0);
}

#[test]
fn test_load_from_malformed_json_leaves_folder_untouched() {
    let mut folder = BookmarkFolder::new(None);
    folder.add("/keep.rs").add_line(1);

    let result = folder.load_from_str("{ bookmarks: [", false);

    assert!(matches!(result, Err(StorageError::MalformedData { .. })));
    assert_eq!(folder.bookmark_count(), 1);
    assert_eq!(folder.find("/keep.rs").unwrap().lines, vec![1]);
}

#[test]
fn test_round_trip_without_rewriting() {
    let json = r#"{"bookmarks":[{"fsPath":"/a.ts","bookmarks":[3,7]}]}"#;
    let mut folder = BookmarkFolder::new(None);
    folder.load_from_str(json, false).unwrap();

    let out = serde_json::to_value(folder.serialize(false)).unwrap();
    let expected: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_reload_of_long_slash_run_is_stable() {
    let json = r#"{"bookmarks":[{"fsPath":"/////a.ts","bookmarks":[3]}]}"#;
    let mut folder = BookmarkFolder::new(None);
    folder.load_from_str(json, false).unwrap();
    let first = folder.serialize(false);

    let mut reloaded = BookmarkFolder::new(None);
    reloaded.load(&first, false);
    let second = reloaded.serialize(false);

    assert_eq!(first.bookmarks[0].path, "/a.ts");
    assert_eq!(first, second);
}

#[test]
fn test_load_skips_line_zero() {
    let json = r#"{"bookmarks":[{"fsPath":"/a.rs","bookmarks":[0,4]},{"fsPath":"/b.rs","bookmarks":[0]}]}"#;
    let mut folder = BookmarkFolder::new(None);
    folder.load_from_str(json, false).unwrap();

    assert_eq!(folder.find("/a.rs").unwrap().lines, vec![4]);
    assert!(folder.find("/b.rs").unwrap().is_empty());
    assert!(folder.serialize(false).bookmarks.iter().all(|b| !b.lines.contains(&0)));
}

#[test]
fn test_load_rewrites_placeholder_to_root() {
    let mut folder = BookmarkFolder::new(Some("/home/dev/project"));
    folder.load(
        &persisted(&[("$ROOTPATH$/src/main.rs", &[1, 2])]),
        true,
    );

    let bookmark = folder.find("/home/dev/project/src/main.rs").unwrap();
    assert_eq!(bookmark.lines, vec![1, 2]);
}

#[test]
fn test_load_without_rewrite_keeps_placeholder() {
    let mut folder = BookmarkFolder::new(Some("/home/dev/project"));
    folder.load(&persisted(&[("$ROOTPATH$/src/main.rs", &[1])]), false);
    assert!(folder.find("$ROOTPATH$/src/main.rs").is_some());
}

#[test]
fn test_serialize_rewrites_root_to_placeholder() {
    let mut folder = BookmarkFolder::new(Some("/home/dev/project"));
    folder.add("/home/dev/project/src/lib.rs").add_line(9);

    let out = folder.serialize(true);
    assert_eq!(out.bookmarks.len(), 1);
    assert_eq!(
        out.bookmarks[0].path,
        format!("{}/src/lib.rs", ROOT_PLACEHOLDER)
    );
}

#[test]
fn test_project_file_loads_under_a_moved_root() {
    let mut original = BookmarkFolder::new(Some("/old/place"));
    original.add("/old/place/a.rs").add_line(5);
    let portable = original.serialize(true);

    let mut moved = BookmarkFolder::new(Some("/new/place"));
    moved.load(&portable, true);

    assert_eq!(moved.find("/new/place/a.rs").unwrap().lines, vec![5]);
}

#[test]
fn test_serialize_prunes_empty_bookmarks_and_copies() {
    let mut folder = BookmarkFolder::new(None);
    folder.add("/empty.rs");
    folder.add("/full.rs").add_line(2);

    let mut out = folder.serialize(false);
    assert_eq!(out.bookmarks.len(), 1);
    assert_eq!(out.bookmarks[0].path, "/full.rs");

    out.bookmarks[0].lines.push(99);
    assert_eq!(
        folder.find("/full.rs").unwrap().lines,
        vec![2],
        "serialize must return a deep copy"
    );
}

#[test]
fn test_load_merges_and_deduplicates_lines() {
    let mut folder = BookmarkFolder::new(None);
    folder.add("/a.rs").add_line(3);
    folder.load(&persisted(&[("/a.rs", &[3, 4, 4]), ("///a.rs", &[5])]), false);

    assert_eq!(folder.bookmark_count(), 1);
    assert_eq!(folder.find("/a.rs").unwrap().lines, vec![3, 4, 5]);
}

#[test]
fn test_contains_and_clear_all() {
    let mut folder = BookmarkFolder::new(Some("/work/app"));
    assert!(folder.contains("/work/app/src/x.rs"));
    assert!(!folder.contains("/work/other/x.rs"));
    assert!(!BookmarkFolder::new(None).contains("/anything"));

    folder.add("/work/app/x.rs").add_line(1);
    folder.clear_all();
    assert!(folder.iter().all(|b| b.is_empty()));
    assert_eq!(folder.bookmark_count(), 1, "files are kept, only lines go");
}
