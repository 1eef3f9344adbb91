#![allow(dead_code)] // Shared across several integration test binaries; each uses a subset.

use core_actions::{Action, dispatch};
use core_state::EditorState;

pub fn empty_state() -> EditorState {
    EditorState::new().unwrap()
}

/// State pre-loaded with `lines` via the bulk interface (history empty,
/// cursor at the end of the loaded text).
pub fn state_with(lines: &[&str]) -> EditorState {
    let mut state = EditorState::new().unwrap();
    state.replace_all_lines(lines.iter().copied()).unwrap();
    state
}

/// Apply a sequence of actions, panicking on the first failure.
pub fn run(state: &mut EditorState, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        let label = format!("{action:?}");
        dispatch(action, state).unwrap_or_else(|e| panic!("{label} failed: {e}"));
    }
}

/// Concatenate every stored row, markers included.
pub fn collected_text(state: &EditorState) -> String {
    state.snapshot_for_output().collect()
}
