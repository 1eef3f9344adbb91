//! Length-validated span operations: delete, cut, copy, paste.
//!
//! Delete, cut, and copy share one precondition: the span must end strictly
//! inside the stored row (`col + length < line_len`), which keeps a
//! terminated row's newline marker out of reach.

use core_state::EditorState;
use core_text::{Dimension, EditError};
use tracing::trace;

fn validated_span(state: &EditorState, length: usize) -> Result<(usize, usize), EditError> {
    let row = state.cursor.row;
    if row > state.buffer.total_rows() {
        return Err(EditError::OutOfRange(Dimension::Row));
    }
    let col = state.cursor.col;
    if col + length >= state.buffer.line_len(row) {
        return Err(EditError::OutOfRange(Dimension::Length));
    }
    Ok((row, col))
}

pub(crate) fn handle_delete(state: &mut EditorState, length: usize) -> Result<(), EditError> {
    let (row, col) = validated_span(state, length)?;
    state.record_snapshot();
    state.buffer.remove_span(row, col, length)?;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "delete", row, col, length, "edit");
    Ok(())
}

pub(crate) fn handle_cut(state: &mut EditorState, length: usize) -> Result<(), EditError> {
    let (row, col) = validated_span(state, length)?;
    let Some(line) = state.buffer.line(row) else {
        return Err(EditError::OutOfRange(Dimension::Row));
    };
    let span = line[col..col + length].to_string();
    state.record_snapshot();
    state.clipboard.store(&span);
    state.buffer.remove_span(row, col, length)?;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "cut", row, col, length, "edit");
    Ok(())
}

pub(crate) fn handle_copy(state: &mut EditorState, length: usize) -> Result<(), EditError> {
    let (row, col) = validated_span(state, length)?;
    let Some(line) = state.buffer.line(row) else {
        return Err(EditError::OutOfRange(Dimension::Row));
    };
    let span = line[col..col + length].to_string();
    state.record_snapshot();
    state.clipboard.store(&span);
    trace!(target: "actions.dispatch", op = "copy", row, col, length, "edit");
    Ok(())
}

pub(crate) fn handle_paste(state: &mut EditorState) -> Result<(), EditError> {
    if state.clipboard.is_empty() {
        return Err(EditError::EmptyClipboard);
    }
    let row = state.cursor.row;
    if row > state.buffer.total_rows() {
        return Err(EditError::OutOfRange(Dimension::Row));
    }
    let col = state.cursor.col;
    if col > state.buffer.line_len(row) {
        return Err(EditError::OutOfRange(Dimension::Column));
    }
    if col + state.clipboard.payload().len() >= state.buffer.col_capacity() - 1 {
        return Err(EditError::OutOfRange(Dimension::Length));
    }
    state.record_snapshot();
    let payload = state.clipboard.payload().to_string();
    state.buffer.shift_right(row, col, payload.len())?;
    state.buffer.overwrite(row, col, &payload)?;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "paste", row, col, bytes = payload.len(), "edit");
    Ok(())
}
