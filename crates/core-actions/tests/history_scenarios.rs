mod common;
use common::*;

use core_actions::{Action, dispatch};
use core_text::EditError;
use pretty_assertions::assert_eq;

#[test]
fn undo_is_available_exactly_three_times() {
    let mut state = empty_state();
    for text in ["a", "b", "c", "d", "e"] {
        run(&mut state, [Action::Append(text.into())]);
    }
    assert_eq!(state.buffer.line(0), Some("abcde"));

    for expected in ["abcd", "abc", "ab"] {
        run(&mut state, [Action::Undo]);
        assert_eq!(state.buffer.line(0), Some(expected));
    }
    assert_eq!(
        dispatch(Action::Undo, &mut state).unwrap_err(),
        EditError::NothingToUndo,
        "older snapshots were evicted at depth 3"
    );
}

#[test]
fn undo_then_redo_is_an_exact_inverse() {
    let mut state = state_with(&["hello"]);
    run(
        &mut state,
        [
            Action::MoveCursor { row: 0, col: 2 },
            Action::Insert("XY".into()),
        ],
    );
    let line_after = state.buffer.line(0).map(str::to_string);
    let cursor_after = state.cursor;
    let clip_after = state.clipboard.payload().to_string();

    run(&mut state, [Action::Undo, Action::Redo]);
    assert_eq!(state.buffer.line(0).map(str::to_string), line_after);
    assert_eq!(state.cursor, cursor_after);
    assert_eq!(state.clipboard.payload(), clip_after);
}

#[test]
fn redo_without_a_preceding_undo_is_an_error() {
    let mut state = state_with(&["x"]);
    assert_eq!(
        dispatch(Action::Redo, &mut state).unwrap_err(),
        EditError::NothingToRedo
    );
}

#[test]
fn fresh_edit_invalidates_redo() {
    let mut state = empty_state();
    run(&mut state, [Action::Append("one".into()), Action::Undo]);
    assert_eq!(state.redo_depth(), 1);

    run(&mut state, [Action::Append("two".into())]);
    assert_eq!(
        dispatch(Action::Redo, &mut state).unwrap_err(),
        EditError::NothingToRedo,
        "redo state from before the new edit is gone"
    );
    assert_eq!(state.buffer.line(0), Some("two"));
}

#[test]
fn cursor_moves_are_not_history_operations() {
    let mut state = state_with(&["abc"]);
    let depth = state.undo_depth();
    run(&mut state, [Action::MoveCursor { row: 0, col: 1 }]);
    assert_eq!(state.undo_depth(), depth);
}

#[test]
fn undo_spans_structural_edits() {
    let mut state = empty_state();
    run(
        &mut state,
        [
            Action::Append("hello".into()),
            Action::StartNewline,
            Action::Append("world".into()),
        ],
    );
    run(&mut state, [Action::Undo]);
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.buffer.line(1), Some(""));
    run(&mut state, [Action::Undo]);
    assert_eq!(state.line_count(), 0);
    assert_eq!(state.buffer.line(0), Some("hello"));
}
