//! Unit tests for a single file's bookmark: line bookkeeping and
//! in-file navigation.

use rstest::rstest;

use linemarks::types::bookmark::{Bookmark, LineUpdate};
use linemarks::types::navigation::{JumpDirection, JumpOutcome};

fn bookmark_with(lines: &[u32]) -> Bookmark {
    let mut bookmark = Bookmark::new("/src/a.rs");
    for line in lines {
        bookmark.add_line(*line);
    }
    bookmark
}

#[test]
fn test_add_line_ignores_duplicates() {
    let mut bookmark = Bookmark::new("/src/a.rs");
    assert!(bookmark.add_line(5));
    assert!(!bookmark.add_line(5));
    assert!(bookmark.add_line(2));
    assert_eq!(bookmark.lines, vec![5, 2], "insertion order is kept");
}

#[test]
fn test_remove_line_and_remove_at() {
    let mut bookmark = bookmark_with(&[3, 7, 9]);
    assert!(bookmark.remove_line(7));
    assert!(!bookmark.remove_line(7));
    assert_eq!(bookmark.remove_at(0), Some(3));
    assert_eq!(bookmark.remove_at(5), None, "out of range is a no-op");
    assert_eq!(bookmark.lines, vec![9]);
}

#[test]
fn test_update_line_replaces_value() {
    let mut bookmark = bookmark_with(&[3, 7]);
    assert_eq!(bookmark.update_line(1, 8), Some(LineUpdate::Replaced));
    assert_eq!(bookmark.lines, vec![3, 8]);
}

#[test]
fn test_update_line_onto_marked_line_merges() {
    let mut bookmark = bookmark_with(&[3, 7]);
    assert_eq!(bookmark.update_line(1, 3), Some(LineUpdate::Merged));
    assert_eq!(bookmark.lines, vec![3]);
}

#[test]
fn test_update_line_to_same_value_is_a_replace() {
    let mut bookmark = bookmark_with(&[3, 7]);
    assert_eq!(bookmark.update_line(0, 3), Some(LineUpdate::Replaced));
    assert_eq!(bookmark.lines, vec![3, 7]);
}

#[test]
fn test_update_line_out_of_range() {
    let mut bookmark = bookmark_with(&[3]);
    assert_eq!(bookmark.update_line(4, 10), None);
    assert_eq!(bookmark.lines, vec![3]);
}

#[test]
fn test_clear() {
    let mut bookmark = bookmark_with(&[1, 2, 3]);
    bookmark.clear();
    assert!(bookmark.is_empty());
    assert_eq!(bookmark.len(), 0);
}

#[rstest]
#[case::forward_middle(&[10, 2, 6], 2, JumpDirection::Forward, false, JumpOutcome::Found(6))]
#[case::forward_between(&[10, 2, 6], 7, JumpDirection::Forward, false, JumpOutcome::Found(10))]
#[case::forward_past_end(&[10, 2, 6], 10, JumpDirection::Forward, false, JumpOutcome::NoMoreBookmarks)]
#[case::forward_wraps(&[10, 2, 6], 10, JumpDirection::Forward, true, JumpOutcome::Found(2))]
#[case::backward_middle(&[10, 2, 6], 10, JumpDirection::Backward, false, JumpOutcome::Found(6))]
#[case::backward_past_start(&[10, 2, 6], 2, JumpDirection::Backward, false, JumpOutcome::NoMoreBookmarks)]
#[case::backward_wraps(&[10, 2, 6], 1, JumpDirection::Backward, true, JumpOutcome::Found(10))]
#[case::single_line_wraps_to_itself(&[4], 4, JumpDirection::Forward, true, JumpOutcome::Found(4))]
#[case::empty_even_with_wrap(&[], 1, JumpDirection::Forward, true, JumpOutcome::NoMoreBookmarks)]
fn test_next_line(
    #[case] lines: &[u32],
    #[case] current: u32,
    #[case] direction: JumpDirection,
    #[case] wrap: bool,
    #[case] expected: JumpOutcome<u32>,
) {
    let bookmark = bookmark_with(lines);
    assert_eq!(bookmark.next_line(current, direction, wrap), expected);
}

#[test]
fn test_first_line_depends_on_direction() {
    let bookmark = bookmark_with(&[8, 3, 5]);
    assert_eq!(bookmark.first_line(JumpDirection::Forward), Some(3));
    assert_eq!(bookmark.first_line(JumpDirection::Backward), Some(8));
    assert_eq!(bookmark.sorted_lines(), vec![3, 5, 8]);
}
