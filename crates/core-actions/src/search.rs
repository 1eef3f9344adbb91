//! Ordered, non-overlapping substring search across live rows.

use core_state::EditorState;
use tracing::debug;

/// A single occurrence: row index and byte column of the match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub col: usize,
}

/// Scan rows `0..=total_rows` in order. Within a row, occurrences are
/// non-overlapping: the scan resumes one pattern length past each match
/// start. An empty result means the scan ran and found nothing; an empty
/// pattern matches nothing.
pub fn search(state: &EditorState, pattern: &str) -> Vec<Match> {
    let mut hits = Vec::new();
    if pattern.is_empty() {
        return hits;
    }
    for row in 0..=state.buffer.total_rows() {
        let Some(line) = state.buffer.line(row) else {
            continue;
        };
        let mut from = 0;
        while let Some(found) = line[from..].find(pattern) {
            let col = from + found;
            hits.push(Match { row, col });
            from = col + pattern.len();
        }
    }
    debug!(target: "actions.search", pattern_bytes = pattern.len(), hits = hits.len(), "search_complete");
    hits
}
