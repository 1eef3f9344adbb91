//! Explicit cursor relocation.

use core_state::EditorState;
use core_text::EditError;
use tracing::trace;

/// Validated move. Not a history operation: snapshots are taken only when
/// buffer or clipboard content changes.
pub(crate) fn handle_move(state: &mut EditorState, row: usize, col: usize) -> Result<(), EditError> {
    state.cursor.move_to(&state.buffer, row, col)?;
    trace!(target: "actions.dispatch", op = "move_cursor", row, col, "motion");
    Ok(())
}
