//! Undo / redo dispatch.

use core_state::EditorState;
use core_text::EditError;
use tracing::trace;

pub(crate) fn handle_undo(state: &mut EditorState) -> Result<(), EditError> {
    state.undo()?;
    trace!(target: "actions.dispatch", op = "undo", undo_depth = state.undo_depth(), redo_depth = state.redo_depth(), "history");
    Ok(())
}

pub(crate) fn handle_redo(state: &mut EditorState) -> Result<(), EditError> {
    state.redo()?;
    trace!(target: "actions.dispatch", op = "redo", undo_depth = state.undo_depth(), redo_depth = state.redo_depth(), "history");
    Ok(())
}
