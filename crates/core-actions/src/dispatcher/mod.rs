//! Dispatcher applying an `Action` to mutable editor state.
//!
//! Decomposed by concern:
//! * `edit`    - append / newline / insert / overwrite
//! * `span`    - length-validated row spans (delete, cut, copy, paste)
//! * `history` - undo / redo
//! * `motion`  - explicit cursor moves
//!
//! Mutating handlers share the validate -> snapshot -> mutate protocol; a
//! handler that errors before its `record_snapshot` call has by construction
//! changed nothing the caller can observe.

use crate::Action;
use core_state::EditorState;
use core_text::EditError;

mod edit;
mod history;
mod motion;
mod span;

/// Apply one action. On `Err`, state is exactly as it was.
pub fn dispatch(action: Action, state: &mut EditorState) -> Result<(), EditError> {
    match action {
        Action::Append(text) => edit::handle_append(state, &text),
        Action::StartNewline => edit::handle_newline(state),
        Action::Insert(text) => edit::handle_insert(state, &text),
        Action::InsertReplace(text) => edit::handle_insert_replace(state, &text),
        Action::Delete(length) => span::handle_delete(state, length),
        Action::Cut(length) => span::handle_cut(state, length),
        Action::Copy(length) => span::handle_copy(state, length),
        Action::Paste => span::handle_paste(state),
        Action::MoveCursor { row, col } => motion::handle_move(state, row, col),
        Action::Undo => history::handle_undo(state),
        Action::Redo => history::handle_redo(state),
    }
}
