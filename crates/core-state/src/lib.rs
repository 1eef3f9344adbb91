//! Editor state: line buffer, cursor, clipboard slot, and snapshot history.
//!
//! `EditorState` is the single owner of everything a mutation can touch. The
//! operation layer (core-actions) drives it under one protocol: validate
//! against current state, record a snapshot, mutate. Undo and redo swap the
//! live `{buffer, cursor, clipboard}` triple for a popped snapshot wholesale,
//! so no operation can observe a partially restored state.
//!
//! The external interface consumed by the collaborators (menu loop, file
//! I/O, cipher transform) is deliberately narrow: `line_count`, `line_text`,
//! `replace_all_lines`, and `snapshot_for_output`. Collaborators never reach
//! into the buffer's storage directly.

use core_text::{Cursor, EditError, LineBuffer};
use std::path::PathBuf;
use tracing::warn;

pub mod undo;
use undo::{History, Snapshot};
pub use undo::HISTORY_DEPTH;

/// Fixed clipboard slot size in bytes.
pub const CLIPBOARD_MAX: usize = 256;

/// Single-slot holder for the most recent cut/copy payload.
///
/// An empty payload means "nothing copied yet". The slot is overwritten by
/// cut/copy and read by paste; it is never cleared implicitly.
#[derive(Debug, Default, Clone)]
pub struct Clipboard {
    payload: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Store a payload, truncating at the fixed slot size.
    pub fn store(&mut self, text: &str) {
        if text.len() > CLIPBOARD_MAX {
            warn!(target: "state.clipboard", size = text.len(), cap = CLIPBOARD_MAX, "payload_truncated");
            self.payload.clear();
            self.payload.push_str(&text[..CLIPBOARD_MAX]);
        } else {
            self.payload.clear();
            self.payload.push_str(text);
        }
    }
}

/// Top-level editor state container.
pub struct EditorState {
    pub buffer: LineBuffer,
    pub cursor: Cursor,
    pub clipboard: Clipboard,
    history: History,
    pub file_name: Option<PathBuf>,
    pub dirty: bool,
}

impl EditorState {
    pub fn new() -> Result<Self, EditError> {
        Ok(Self {
            buffer: LineBuffer::new()?,
            cursor: Cursor::origin(),
            clipboard: Clipboard::new(),
            history: History::new(),
            file_name: None,
            dirty: false,
        })
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Record the current state onto the undo stack. Called by every
    /// mutating operation after validation, before the mutation itself.
    pub fn record_snapshot(&mut self) {
        self.history
            .record(Snapshot::capture(&self.buffer, self.cursor, &self.clipboard));
    }

    /// Swap live state for the newest undo snapshot, parking the current
    /// state on the redo stack.
    pub fn undo(&mut self) -> Result<(), EditError> {
        let current = Snapshot::capture(&self.buffer, self.cursor, &self.clipboard);
        let restored = self.history.undo(current)?;
        self.apply_snapshot(restored);
        Ok(())
    }

    /// Swap live state for the newest redo snapshot. No new undo snapshot
    /// is taken.
    pub fn redo(&mut self) -> Result<(), EditError> {
        let restored = self.history.redo()?;
        self.apply_snapshot(restored);
        Ok(())
    }

    fn apply_snapshot(&mut self, snap: Snapshot) {
        let (buffer, cursor, clipboard) = snap.into_parts();
        self.buffer = buffer;
        self.cursor = cursor;
        self.clipboard = clipboard;
        self.dirty = true;
    }

    // ---- external interface ------------------------------------------------

    /// Index of the last populated row (0-based, inclusive). Collaborators
    /// iterate `0..=line_count()`.
    pub fn line_count(&self) -> usize {
        self.buffer.total_rows()
    }

    /// Row content without the internal newline marker.
    pub fn line_text(&self, row: usize) -> Option<&str> {
        self.buffer
            .line(row)
            .map(|l| l.strip_suffix('\n').unwrap_or(l))
    }

    /// Read-only view of every live row in order, markers included, for the
    /// save/print collaborators.
    pub fn snapshot_for_output(&self) -> impl Iterator<Item = &str> {
        (0..=self.buffer.total_rows()).filter_map(|row| self.buffer.line(row))
    }

    /// Bulk-load external content, replacing the buffer entirely. Capacity
    /// grows as needed, the cursor moves to the end of the loaded text, and
    /// history is reset; the clipboard is left alone.
    pub fn replace_all_lines<I, S>(&mut self, lines: I) -> Result<(), EditError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fresh = LineBuffer::new()?;
        let mut last = 0usize;
        for (row, line) in lines.into_iter().enumerate() {
            if row > 0 {
                fresh.append_to_row(row - 1, "\n")?;
                fresh.insert_row_after(row - 1)?;
            }
            fresh.set_line(row, line.as_ref())?;
            last = row;
        }
        self.cursor = Cursor::at(last, fresh.line_len(last));
        self.buffer = fresh;
        self.history.clear();
        self.dirty = false;
        Ok(())
    }
}
