// Solve statistics exposed as plain data.
//
// The notification/telemetry collaborator consumes these numbers; the core
// only carries them, it never formats a report.

use serde::Serialize;

use crate::config::Mode;

/// Statistics for one completed solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveSummary {
    /// Profile the solve ran with.
    pub mode: Mode,
    /// Board height in rows.
    pub grid_rows: usize,
    /// Board width in columns.
    pub grid_cols: usize,
    /// Number of non-empty cells on the board.
    pub letter_cells: usize,
    /// Size of the assembled vocabulary.
    pub vocabulary_size: usize,
    /// Playable words found.
    pub found_words: usize,
    /// Found words rejected by the proper-noun denylist.
    pub invalid_words: usize,
    /// Time spent assembling the vocabulary, in milliseconds.
    pub assemble_ms: u64,
    /// Time spent searching the grid, in milliseconds.
    pub search_ms: u64,
    /// Whether the wall-clock budget expired before the search finished.
    pub deadline_hit: bool,
}

impl Default for SolveSummary {
    fn default() -> Self {
        Self {
            mode: Mode::Quick,
            grid_rows: 0,
            grid_cols: 0,
            letter_cells: 0,
            vocabulary_size: 0,
            found_words: 0,
            invalid_words: 0,
            assemble_ms: 0,
            search_ms: 0,
            deadline_hit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_quick() {
        let summary = SolveSummary::default();
        assert_eq!(summary.mode, Mode::Quick);
        assert_eq!(summary.found_words, 0);
        assert!(!summary.deadline_hit);
    }
}
