//! Text mutation handlers: append, newline, insert, overwrite.

use core_state::EditorState;
use core_text::{Cursor, Dimension, EditError};
use tracing::trace;

/// Append to the last populated row, growing columns as needed. Always
/// succeeds short of allocation failure; the cursor lands at the row's end.
pub(crate) fn handle_append(state: &mut EditorState, text: &str) -> Result<(), EditError> {
    state.record_snapshot();
    let row = state.buffer.total_rows();
    state.buffer.append_to_row(row, text)?;
    state.cursor = Cursor::at(row, state.buffer.line_len(row));
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "append", row, bytes = text.len(), "edit");
    Ok(())
}

/// Break the line at the cursor. The tail after the cursor moves to a fresh
/// row below, rows further down shift, and the cursor lands at column 0 of
/// the new row.
pub(crate) fn handle_newline(state: &mut EditorState) -> Result<(), EditError> {
    state.record_snapshot();
    let row = state.cursor.row;
    let col = state.cursor.byte_offset(&state.buffer);
    state.buffer.split_row(row, col)?;
    state.cursor = Cursor::at(row + 1, 0);
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "newline", from_row = row, from_col = col, "edit");
    Ok(())
}

/// Shift the suffix right and write `text` into the gap. The cursor does not
/// advance.
pub(crate) fn handle_insert(state: &mut EditorState, text: &str) -> Result<(), EditError> {
    let Cursor { row, col } = state.cursor;
    if row > state.buffer.total_rows() {
        return Err(EditError::OutOfRange(Dimension::Row));
    }
    if col > state.buffer.line_len(row) {
        return Err(EditError::OutOfRange(Dimension::Column));
    }
    state.record_snapshot();
    state.buffer.shift_right(row, col, text.len())?;
    state.buffer.overwrite(row, col, text)?;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "insert", row, col, bytes = text.len(), "edit");
    Ok(())
}

/// Overwrite in place, no shift. Nothing grows on this path, so the write is
/// bounded by current column capacity up front.
pub(crate) fn handle_insert_replace(state: &mut EditorState, text: &str) -> Result<(), EditError> {
    let Cursor { row, col } = state.cursor;
    if row > state.buffer.total_rows() {
        return Err(EditError::OutOfRange(Dimension::Row));
    }
    if col > state.buffer.line_len(row) {
        return Err(EditError::OutOfRange(Dimension::Column));
    }
    if col + text.len() >= state.buffer.col_capacity() {
        return Err(EditError::OutOfRange(Dimension::Length));
    }
    state.record_snapshot();
    state.buffer.overwrite(row, col, text)?;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "insert_replace", row, col, bytes = text.len(), "edit");
    Ok(())
}
