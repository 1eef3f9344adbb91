//! Bounded snapshot history.
//!
//! Undo/redo works on full-state snapshots rather than diffs: the buffer is
//! small and bounded, so a deep copy per history slot is cheap, and restoring
//! a snapshot can never leave buffer, cursor, and clipboard half-consistent
//! with each other. Both stacks hold at most `HISTORY_DEPTH` entries, newest
//! last; pushing past capacity evicts the oldest entry. This is a bounded
//! scratch history, not an edit log.
//!
//! A fresh forward edit clears the redo stack, so redo can only replay state
//! that is still downstream of the current buffer.

use crate::Clipboard;
use core_text::{Cursor, EditError, LineBuffer};
use tracing::trace;

/// Maximum number of snapshots retained in each direction.
pub const HISTORY_DEPTH: usize = 3;

/// An immutable deep copy of `{buffer, cursor, clipboard}` at one instant.
#[derive(Debug, Clone)]
pub struct Snapshot {
    buffer: LineBuffer,
    cursor: Cursor,
    clipboard: Clipboard,
}

impl Snapshot {
    pub fn capture(buffer: &LineBuffer, cursor: Cursor, clipboard: &Clipboard) -> Self {
        Self {
            buffer: buffer.clone(),
            cursor,
            clipboard: clipboard.clone(),
        }
    }

    /// Consume the snapshot, yielding its parts for restore.
    pub fn into_parts(self) -> (LineBuffer, Cursor, Clipboard) {
        (self.buffer, self.cursor, self.clipboard)
    }
}

#[derive(Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the pre-mutation state of a forward edit. Invalidates any
    /// pending redo state.
    pub fn record(&mut self, snap: Snapshot) {
        push_bounded(&mut self.undo_stack, snap);
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), "record_snapshot");
    }

    /// Pop the newest undo snapshot, parking `current` on the redo stack.
    /// `current` is dropped untouched when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Result<Snapshot, EditError> {
        let restored = self.undo_stack.pop().ok_or(EditError::NothingToUndo)?;
        push_bounded(&mut self.redo_stack, current);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        Ok(restored)
    }

    /// Pop the newest redo snapshot. No new undo snapshot is pushed; the
    /// matching undo entry already exists from the operation being replayed.
    pub fn redo(&mut self) -> Result<Snapshot, EditError> {
        let restored = self.redo_stack.pop().ok_or(EditError::NothingToRedo)?;
        trace!(target: "state.undo", redo_depth = self.redo_stack.len(), "redo_pop");
        Ok(restored)
    }

    /// Drop all history (bulk load path).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        trace!(target: "state.undo", "history_cleared");
    }
}

fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot) {
    if stack.len() == HISTORY_DEPTH {
        stack.remove(0);
        trace!(target: "state.undo", "oldest_snapshot_evicted");
    }
    stack.push(snap);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> Snapshot {
        let mut buffer = LineBuffer::new().unwrap();
        buffer.set_line(0, text).unwrap();
        Snapshot::capture(&buffer, Cursor::origin(), &Clipboard::new())
    }

    fn first_line(s: Snapshot) -> String {
        let (buffer, _, _) = s.into_parts();
        buffer.line(0).unwrap().to_string()
    }

    #[test]
    fn depth_is_bounded_with_oldest_evicted() {
        let mut h = History::new();
        for text in ["a", "b", "c", "d", "e"] {
            h.record(snap(text));
        }
        assert_eq!(h.undo_depth(), HISTORY_DEPTH);
        assert_eq!(first_line(h.undo(snap("live")).unwrap()), "e");
        assert_eq!(first_line(h.undo(snap("live")).unwrap()), "d");
        assert_eq!(first_line(h.undo(snap("live")).unwrap()), "c");
        assert_eq!(
            h.undo(snap("live")).unwrap_err(),
            EditError::NothingToUndo,
            "a and b were evicted"
        );
    }

    #[test]
    fn undo_parks_current_state_for_redo() {
        let mut h = History::new();
        h.record(snap("before"));
        let restored = h.undo(snap("after")).unwrap();
        assert_eq!(first_line(restored), "before");
        assert_eq!(h.redo_depth(), 1);
        assert_eq!(first_line(h.redo().unwrap()), "after");
        assert_eq!(h.redo().unwrap_err(), EditError::NothingToRedo);
    }

    #[test]
    fn fresh_edit_clears_redo() {
        let mut h = History::new();
        h.record(snap("one"));
        let _ = h.undo(snap("two")).unwrap();
        assert_eq!(h.redo_depth(), 1);
        h.record(snap("three"));
        assert_eq!(h.redo_depth(), 0);
        assert_eq!(h.redo().unwrap_err(), EditError::NothingToRedo);
    }

    #[test]
    fn failed_undo_leaves_redo_untouched() {
        let mut h = History::new();
        assert_eq!(h.undo(snap("live")).unwrap_err(), EditError::NothingToUndo);
        assert_eq!(h.redo_depth(), 0);
    }
}
