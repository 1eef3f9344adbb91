mod common;
use common::*;

use core_actions::{Match, search};
use pretty_assertions::assert_eq;

#[test]
fn matches_within_a_row_do_not_overlap() {
    let state = state_with(&["aaaa"]);
    let hits = search(&state, "aa");
    assert_eq!(
        hits,
        vec![Match { row: 0, col: 0 }, Match { row: 0, col: 2 }]
    );
}

#[test]
fn matches_are_ordered_by_row_then_column() {
    let state = state_with(&["one two one", "two one"]);
    let hits = search(&state, "one");
    assert_eq!(
        hits,
        vec![
            Match { row: 0, col: 0 },
            Match { row: 0, col: 8 },
            Match { row: 1, col: 4 },
        ]
    );
}

#[test]
fn empty_result_means_searched_and_absent() {
    let state = state_with(&["hello"]);
    assert!(search(&state, "zzz").is_empty());
}

#[test]
fn empty_pattern_matches_nothing() {
    let state = state_with(&["hello"]);
    assert!(search(&state, "").is_empty());
}

#[test]
fn search_never_mutates() {
    let mut state = state_with(&["aaaa"]);
    state.record_snapshot();
    let depth = state.undo_depth();
    let before = collected_text(&state);
    let _ = search(&state, "aa");
    assert_eq!(collected_text(&state), before);
    assert_eq!(state.undo_depth(), depth);
}
