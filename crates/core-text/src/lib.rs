//! Row/column line storage with an explicit growth policy.
//!
//! The buffer is a dense grid: an ordered list of byte rows plus a tracked
//! logical capacity in both dimensions. Row capacity grows in `ROW_CHUNK`
//! steps, column capacity in `COL_CHUNK` steps, and both thresholds are
//! observable so growth stays a testable policy instead of hiding inside
//! container heuristics. Rows `0..=total_rows` are live; everything beyond is
//! pre-allocated empty capacity waiting for a newline.
//!
//! Line-break convention: a row that has been terminated by a newline stores
//! a trailing `'\n'`; the last live row has none. All length arithmetic
//! (`line_len`, span validation) operates on the full stored row including
//! that marker.
//!
//! Offsets are byte offsets. Multi-byte segmentation is out of scope for this
//! engine; callers feed it single-byte text.

use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Row capacity growth step.
pub const ROW_CHUNK: usize = 10;
/// Column capacity growth step (uniform across rows).
pub const COL_CHUNK: usize = 128;

/// Which bound a rejected request violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Row,
    Column,
    Length,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Row => "row",
            Dimension::Column => "column",
            Dimension::Length => "length",
        })
    }
}

/// Unified result contract for every core operation.
///
/// Everything except `Allocation` is detected before any mutation and leaves
/// state untouched. `Allocation` means capacity growth itself failed; the
/// editor makes no recovery attempt and expects to be restarted from
/// persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{0} is out of range")]
    OutOfRange(Dimension),
    #[error("the clipboard is empty")]
    EmptyClipboard,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error("buffer allocation failed")]
    Allocation,
}

impl From<TryReserveError> for EditError {
    fn from(_: TryReserveError) -> Self {
        EditError::Allocation
    }
}

/// Two-dimensional growable line storage.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    /// Row slots; `rows.len() == row_capacity`, live content in `0..=total_rows`.
    rows: Vec<String>,
    row_capacity: usize,
    col_capacity: usize,
    total_rows: usize,
}

impl LineBuffer {
    /// Construct an empty buffer: one zero-length live row, `ROW_CHUNK` row
    /// slots, `COL_CHUNK` columns.
    pub fn new() -> Result<Self, EditError> {
        let mut buf = Self {
            rows: Vec::new(),
            row_capacity: 0,
            col_capacity: COL_CHUNK,
            total_rows: 0,
        };
        buf.grow_rows(ROW_CHUNK)?;
        Ok(buf)
    }

    /// Index of the last live row (0-based, inclusive).
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    pub fn col_capacity(&self) -> usize {
        self.col_capacity
    }

    /// Full stored content of a live row, internal newline marker included.
    pub fn line(&self, row: usize) -> Option<&str> {
        if row <= self.total_rows {
            Some(self.rows[row].as_str())
        } else {
            None
        }
    }

    /// Stored byte length of a live row (marker included); 0 past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, str::len)
    }

    /// Extend row capacity to hold at least `target` rows, in `ROW_CHUNK`
    /// steps. New slots start as empty rows with full column capacity.
    pub fn grow_rows(&mut self, target: usize) -> Result<(), EditError> {
        if target <= self.row_capacity {
            return Ok(());
        }
        let mut capacity = self.row_capacity;
        while capacity < target {
            capacity += ROW_CHUNK;
        }
        self.rows.try_reserve(capacity - self.rows.len())?;
        while self.rows.len() < capacity {
            self.rows.push(Self::fresh_row(self.col_capacity)?);
        }
        trace!(target: "text.grid", from = self.row_capacity, to = capacity, "grow_rows");
        self.row_capacity = capacity;
        Ok(())
    }

    /// Extend column capacity uniformly to at least `target`, in `COL_CHUNK`
    /// steps.
    pub fn grow_cols(&mut self, target: usize) -> Result<(), EditError> {
        if target <= self.col_capacity {
            return Ok(());
        }
        let mut capacity = self.col_capacity;
        while capacity < target {
            capacity += COL_CHUNK;
        }
        for row in &mut self.rows {
            row.try_reserve(capacity - row.len())?;
        }
        trace!(target: "text.grid", from = self.col_capacity, to = capacity, "grow_cols");
        self.col_capacity = capacity;
        Ok(())
    }

    /// Open a gap of `amount` bytes at `start` in `row` by moving the suffix
    /// right, growing columns first if the shifted content would reach
    /// capacity. Content before `start` is unchanged, content from `start`
    /// onward moves exactly `amount` positions. The gap is zero-filled;
    /// callers overwrite it immediately.
    pub fn shift_right(&mut self, row: usize, start: usize, amount: usize) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        let len = self.line_len(row);
        if start > len {
            return Err(EditError::OutOfRange(Dimension::Column));
        }
        if len + amount >= self.col_capacity {
            self.grow_cols(len + amount + 1)?;
        }
        let gap = "\0".repeat(amount);
        self.rows[row].insert_str(start, &gap);
        Ok(())
    }

    /// Overwrite bytes starting at `col` with `text`, no shift; the row
    /// extends when `text` runs past its current end. Callers are responsible
    /// for capacity (`shift_right` first, or an explicit bound check).
    pub fn overwrite(&mut self, row: usize, col: usize, text: &str) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        let line = &mut self.rows[row];
        if col > line.len() {
            return Err(EditError::OutOfRange(Dimension::Column));
        }
        let end = col + text.len();
        if end >= line.len() {
            line.truncate(col);
            line.push_str(text);
        } else {
            line.replace_range(col..end, text);
        }
        Ok(())
    }

    /// Append `text` to a live row, growing columns as needed.
    pub fn append_to_row(&mut self, row: usize, text: &str) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        let needed = self.line_len(row) + text.len();
        if needed >= self.col_capacity {
            self.grow_cols(needed + 1)?;
        }
        self.rows[row].push_str(text);
        Ok(())
    }

    /// Replace the full content of a live row, growing columns as needed.
    pub fn set_line(&mut self, row: usize, text: &str) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        if text.len() >= self.col_capacity {
            self.grow_cols(text.len() + 1)?;
        }
        self.rows[row].clear();
        self.rows[row].push_str(text);
        Ok(())
    }

    /// Remove `len` bytes starting at `start`, shifting the remainder left.
    pub fn remove_span(&mut self, row: usize, start: usize, len: usize) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        if start + len > self.line_len(row) {
            return Err(EditError::OutOfRange(Dimension::Length));
        }
        self.rows[row].replace_range(start..start + len, "");
        Ok(())
    }

    /// Insert a fresh empty row below `row`, shifting later rows down and
    /// growing row capacity when the next slot would not fit.
    pub fn insert_row_after(&mut self, row: usize) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        if self.total_rows + 1 >= self.row_capacity {
            self.grow_rows(self.row_capacity + ROW_CHUNK)?;
        }
        // Recycle an unused tail slot so rows.len() stays equal to row_capacity.
        self.rows.pop();
        self.rows.insert(row + 1, Self::fresh_row(self.col_capacity)?);
        self.total_rows += 1;
        Ok(())
    }

    /// Split a live row at byte `col`: the head keeps a newline marker, the
    /// tail (original marker included, if any) moves to a freshly inserted
    /// row below.
    pub fn split_row(&mut self, row: usize, col: usize) -> Result<(), EditError> {
        if row > self.total_rows {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        if col > self.line_len(row) {
            return Err(EditError::OutOfRange(Dimension::Column));
        }
        if col + 1 >= self.col_capacity {
            self.grow_cols(col + 2)?;
        }
        self.insert_row_after(row)?;
        let tail = self.rows[row].split_off(col);
        self.rows[row].push('\n');
        self.rows[row + 1] = tail;
        Ok(())
    }

    fn fresh_row(col_capacity: usize) -> Result<String, EditError> {
        let mut row = String::new();
        row.try_reserve(col_capacity)?;
        Ok(row)
    }
}

/// A (row, column) edit position validated against buffer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    pub fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Explicit move request. Succeeds only inside the live region
    /// (`row <= total_rows`, `col <= line_len(row)`); on failure the cursor
    /// is left unchanged and the violated dimension is reported.
    pub fn move_to(&mut self, buffer: &LineBuffer, row: usize, col: usize) -> Result<(), EditError> {
        if row > buffer.total_rows() {
            return Err(EditError::OutOfRange(Dimension::Row));
        }
        if col > buffer.line_len(row) {
            return Err(EditError::OutOfRange(Dimension::Column));
        }
        self.row = row;
        self.col = col;
        Ok(())
    }

    /// Byte offset the cursor denotes within its row, clamped to the stored
    /// length. Mutation operations index through this.
    pub fn byte_offset(&self, buffer: &LineBuffer) -> usize {
        self.col.min(buffer.line_len(self.row))
    }
}
