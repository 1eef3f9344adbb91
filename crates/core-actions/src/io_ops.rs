//! File save/load collaborators.
//!
//! Persisted layout is flat text: one logical buffer line per output line,
//! no header, no encoding metadata; bytes pass through unchanged. Both
//! directions go through the state's bulk interface (`snapshot_for_output`,
//! `replace_all_lines`) rather than touching row storage.

use core_state::EditorState;
use std::path::Path;
use tracing::{debug, error};

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveFileResult {
    Success,
    Error, // caller displays; details already logged
}

/// Result of attempting to load a file into the buffer.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadFileResult {
    Success { rows: usize },
    Error,
}

/// Serialize every live row out to `path`.
pub fn save_file(state: &mut EditorState, path: &Path) -> SaveFileResult {
    let mut content = String::new();
    for row in state.snapshot_for_output() {
        content.push_str(row);
    }
    match std::fs::write(path, content.as_bytes()) {
        Ok(()) => {
            state.dirty = false;
            debug!(target: "io", file = %path.display(), bytes = content.len(), "file_write_ok");
            SaveFileResult::Success
        }
        Err(e) => {
            error!(target: "io", ?e, "file_write_error");
            SaveFileResult::Error
        }
    }
}

/// Load `path`, replacing the buffer contents entirely (history resets).
pub fn load_file(state: &mut EditorState, path: &Path) -> LoadFileResult {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!(target: "io", ?e, "file_open_error");
            return LoadFileResult::Error;
        }
    };
    if let Err(e) = state.replace_all_lines(content.split('\n')) {
        error!(target: "io", ?e, "buffer_load_failed");
        return LoadFileResult::Error;
    }
    state.file_name = Some(path.to_path_buf());
    let rows = state.line_count();
    debug!(target: "io", file = %path.display(), bytes = content.len(), rows, "file_read_ok");
    LoadFileResult::Success { rows }
}
