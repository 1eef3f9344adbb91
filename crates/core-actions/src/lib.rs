//! Mutation operations over `EditorState`.
//!
//! Every mutating operation is an `Action` applied through `dispatch`, under
//! one protocol: validate against current state (returning an error with no
//! state change on failure), record a snapshot, mutate, report. Search is
//! read-only and lives beside the dispatcher. The file save/load
//! collaborators are in `io_ops` and go through the state's bulk interface
//! only.

pub mod dispatcher;
pub mod io_ops;
mod search;

pub use dispatcher::dispatch;
pub use search::{Match, search};

/// One editor operation, carrying its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append text to the last populated row; cursor lands at its end.
    Append(String),
    /// Break the line at the cursor; cursor lands at column 0 of the new row.
    StartNewline,
    /// Open a gap at the cursor and write text into it; cursor stays put.
    Insert(String),
    /// Overwrite in place at the cursor, no shift.
    InsertReplace(String),
    /// Remove `n` bytes at the cursor, shifting the remainder left.
    Delete(usize),
    /// Clipboard-capturing delete.
    Cut(usize),
    /// Clipboard capture without touching the row.
    Copy(usize),
    /// Insert the clipboard payload at the cursor.
    Paste,
    /// Validated cursor relocation. Not recorded in history.
    MoveCursor { row: usize, col: usize },
    Undo,
    Redo,
}
