mod common;
use common::*;

use core_actions::{Action, dispatch};
use core_text::{Dimension, EditError};
use pretty_assertions::assert_eq;

#[test]
fn copy_captures_without_touching_the_row() {
    let mut state = state_with(&["hello"]);
    run(
        &mut state,
        [Action::MoveCursor { row: 0, col: 0 }, Action::Copy(2)],
    );
    assert_eq!(state.clipboard.payload(), "he");
    assert_eq!(state.buffer.line(0), Some("hello"));

    run(
        &mut state,
        [Action::MoveCursor { row: 0, col: 5 }, Action::Paste],
    );
    assert_eq!(state.buffer.line(0), Some("hellohe"));
}

#[test]
fn cut_then_paste_at_same_position_restores_the_line() {
    let mut state = state_with(&["abcdef"]);
    run(
        &mut state,
        [Action::MoveCursor { row: 0, col: 1 }, Action::Cut(3)],
    );
    assert_eq!(state.buffer.line(0), Some("aef"));
    assert_eq!(state.clipboard.payload(), "bcd");

    run(&mut state, [Action::Paste]);
    assert_eq!(state.buffer.line(0), Some("abcdef"));
}

#[test]
fn delete_removes_without_clipboard_capture() {
    let mut state = state_with(&["abcdef"]);
    run(
        &mut state,
        [Action::MoveCursor { row: 0, col: 1 }, Action::Delete(3)],
    );
    assert_eq!(state.buffer.line(0), Some("aef"));
    assert!(state.clipboard.is_empty());
}

#[test]
fn spans_must_end_strictly_inside_the_row() {
    let mut state = state_with(&["abc"]);
    run(&mut state, [Action::MoveCursor { row: 0, col: 0 }]);
    let depth = state.undo_depth();
    for action in [Action::Delete(3), Action::Cut(3), Action::Copy(3)] {
        let err = dispatch(action, &mut state).unwrap_err();
        assert_eq!(err, EditError::OutOfRange(Dimension::Length));
    }
    assert_eq!(state.buffer.line(0), Some("abc"));
    assert!(state.clipboard.is_empty());
    assert_eq!(state.undo_depth(), depth, "rejected spans take no snapshot");
}

#[test]
fn paste_with_empty_clipboard_is_an_error() {
    let mut state = state_with(&["abc"]);
    assert_eq!(
        dispatch(Action::Paste, &mut state).unwrap_err(),
        EditError::EmptyClipboard
    );
}

#[test]
fn paste_is_bounded_by_column_capacity() {
    let long = "y".repeat(120);
    let mut state = state_with(&[long.as_str()]);
    run(
        &mut state,
        [
            Action::MoveCursor { row: 0, col: 0 },
            Action::Copy(100),
            Action::MoveCursor { row: 0, col: 30 },
        ],
    );
    let err = dispatch(Action::Paste, &mut state).unwrap_err();
    assert_eq!(err, EditError::OutOfRange(Dimension::Length));
    assert_eq!(state.buffer.line_len(0), 120, "rejected paste mutates nothing");
}

#[test]
fn cut_snapshot_preserves_pre_cut_clipboard() {
    let mut state = state_with(&["abcdef"]);
    run(
        &mut state,
        [
            Action::MoveCursor { row: 0, col: 0 },
            Action::Copy(1),
            Action::MoveCursor { row: 0, col: 1 },
            Action::Cut(2),
        ],
    );
    assert_eq!(state.clipboard.payload(), "bc");
    run(&mut state, [Action::Undo]);
    assert_eq!(state.clipboard.payload(), "a", "undo restores the clipboard slot too");
    assert_eq!(state.buffer.line(0), Some("abcdef"));
}
