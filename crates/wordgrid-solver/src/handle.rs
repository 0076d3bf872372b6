// SolverHandle: top-level solve orchestration.
//
// Owns the configuration and the denylist, takes the day's board from a
// BoardProvider, and drives grid construction, vocabulary assembly, the
// search, and denylist partitioning. The public `solve` never propagates
// an internal failure: the caller always receives a well-typed Solution,
// empty when the attempt failed, with the diagnostic logged.

use std::time::Instant;

use wordgrid_core::config::{Mode, SolverConfig};
use wordgrid_core::summary::SolveSummary;
use wordgrid_search::{search_with, Deadline, Grid, GridError};

use crate::denylist::Denylist;
use crate::lexicon;

/// The external board source could not supply today's puzzle (not yet
/// published, page layout changed, network down).
#[derive(Debug, thiserror::Error)]
#[error("board source unavailable: {0}")]
pub struct BoardUnavailableError(pub String);

/// Error type for one solve attempt.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    BoardUnavailable(#[from] BoardUnavailableError),

    #[error(transparent)]
    MalformedBoard(#[from] GridError),
}

/// Today's puzzle as supplied by the board source: row strings over the
/// lowercase alphabet plus blanks, and the designated bonus word.
#[derive(Debug, Clone)]
pub struct DailyBoard {
    pub rows: Vec<String>,
    pub bonus_word: String,
}

/// External board-source collaborator seam.
///
/// The solver treats the board as opaque input; how it was obtained
/// (scraped, fetched, read from a file) is the provider's business.
pub trait BoardProvider {
    fn today(&self) -> Result<DailyBoard, BoardUnavailableError>;
}

/// One solve's output, handed to the play-automation collaborator.
///
/// `words` is the sorted playable list; the bonus word is carried through
/// so the automation can submit it last; `invalid` is what the denylist
/// rejected and the automation must skip.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub words: Vec<String>,
    pub bonus_word: String,
    pub invalid: Vec<String>,
    pub summary: SolveSummary,
}

/// Top-level handle owning the solver configuration and denylist.
pub struct SolverHandle {
    config: SolverConfig,
    denylist: Denylist,
}

impl SolverHandle {
    /// Create a handle, loading the denylist if one is configured.
    pub fn new(config: SolverConfig) -> Self {
        let denylist = match &config.denylist_path {
            Some(path) => Denylist::load(path),
            None => Denylist::default(),
        };
        Self { config, denylist }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Solve today's board. Never fails: any internal error is logged and
    /// normalized into an empty [`Solution`] the caller can branch on.
    pub fn solve(&self, provider: &dyn BoardProvider, mode: Mode, seed: &[String]) -> Solution {
        match self.try_solve(provider, mode, seed) {
            Ok(solution) => solution,
            Err(err) => {
                log::error!("solve attempt failed, returning empty result: {err}");
                Solution::default()
            }
        }
    }

    /// Solve today's board, surfacing the failure: an unavailable board
    /// source or a malformed board.
    pub fn try_solve(
        &self,
        provider: &dyn BoardProvider,
        mode: Mode,
        seed: &[String],
    ) -> Result<Solution, SolveError> {
        let board = provider.today()?;
        self.solve_board(&board, mode, seed)
    }

    /// Solve an already-materialized board.
    pub fn solve_board(
        &self,
        board: &DailyBoard,
        mode: Mode,
        seed: &[String],
    ) -> Result<Solution, SolveError> {
        let grid = Grid::build(&board.rows)?;

        let assemble_start = Instant::now();
        let sources = self.config.sources_for(mode);
        // Only the exhaustive profile accepts seed words; quick solves
        // from the curated sources alone.
        let seed = match mode {
            Mode::Exhaustive => seed,
            Mode::Quick => &[],
        };
        let vocabulary = lexicon::assemble(&sources, seed, self.config.min_word_len);
        let assemble_ms = assemble_start.elapsed().as_millis() as u64;

        let deadline = self.config.budget.map(Deadline::after);
        let search_start = Instant::now();
        let outcome = search_with(
            &grid,
            &vocabulary,
            self.config.min_word_len,
            self.config.threads,
            deadline,
        );
        let search_ms = search_start.elapsed().as_millis() as u64;

        let mut found: Vec<String> = outcome.words.into_iter().collect();
        found.sort_unstable();
        let (words, invalid) = self.denylist.partition(found);

        let summary = SolveSummary {
            mode,
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
            letter_cells: grid.letter_cells().count(),
            vocabulary_size: vocabulary.len(),
            found_words: words.len(),
            invalid_words: invalid.len(),
            assemble_ms,
            search_ms,
            deadline_hit: outcome.deadline_hit,
        };
        log::info!(
            "solved {:?}: {} playable, {} invalid, vocabulary {}, search {}ms",
            mode,
            summary.found_words,
            summary.invalid_words,
            summary.vocabulary_size,
            summary.search_ms
        );

        Ok(Solution {
            words,
            bonus_word: board.bonus_word.clone(),
            invalid,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBoard(DailyBoard);

    impl BoardProvider for FixedBoard {
        fn today(&self) -> Result<DailyBoard, BoardUnavailableError> {
            Ok(self.0.clone())
        }
    }

    struct NoBoard;

    impl BoardProvider for NoBoard {
        fn today(&self) -> Result<DailyBoard, BoardUnavailableError> {
            Err(BoardUnavailableError("not published yet".into()))
        }
    }

    fn board(rows: &[&str], bonus: &str) -> DailyBoard {
        DailyBoard {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            bonus_word: bonus.to_string(),
        }
    }

    #[test]
    fn unavailable_board_normalizes_to_empty_solution() {
        let handle = SolverHandle::new(SolverConfig::default());
        let solution = handle.solve(&NoBoard, Mode::Quick, &[]);
        assert!(solution.words.is_empty());
        assert!(solution.bonus_word.is_empty());
        assert!(solution.invalid.is_empty());
    }

    #[test]
    fn malformed_board_normalizes_to_empty_solution() {
        let handle = SolverHandle::new(SolverConfig::default());
        let provider = FixedBoard(board(&[], "none"));
        let solution = handle.solve(&provider, Mode::Quick, &[]);
        assert!(solution.words.is_empty());

        let err = handle.try_solve(&provider, Mode::Quick, &[]).unwrap_err();
        assert!(matches!(err, SolveError::MalformedBoard(_)));
    }

    #[test]
    fn seed_words_reach_the_search_in_exhaustive_mode() {
        // No sources configured at all: the exhaustive vocabulary is just
        // the seed, which is enough to find "seat" on the board.
        let handle = SolverHandle::new(SolverConfig::default());
        let provider = FixedBoard(board(&["seat", "eat "], "lard"));
        let seed = ["seat".to_string(), "eat".to_string()];
        let solution = handle.solve(&provider, Mode::Exhaustive, &seed);

        assert_eq!(solution.words, ["seat"]);
        assert_eq!(solution.bonus_word, "lard");
        assert_eq!(solution.summary.vocabulary_size, 1);
        assert_eq!(solution.summary.letter_cells, 7);
    }

    #[test]
    fn quick_mode_solves_from_curated_sources_only() {
        // Seed words belong to the exhaustive profile; a quick solve with
        // no curated sources has an empty vocabulary no matter the seed.
        let handle = SolverHandle::new(SolverConfig::default());
        let provider = FixedBoard(board(&["seat"], ""));
        let seed = ["seat".to_string()];

        let quick = handle.solve(&provider, Mode::Quick, &seed);
        assert!(quick.words.is_empty());
        assert_eq!(quick.summary.vocabulary_size, 0);

        // The same seed does reach the exhaustive profile.
        let exhaustive = handle.solve(&provider, Mode::Exhaustive, &seed);
        assert_eq!(exhaustive.words, ["seat"]);
    }

    #[test]
    fn empty_vocabulary_yields_empty_words_not_an_error() {
        let handle = SolverHandle::new(SolverConfig::default());
        let provider = FixedBoard(board(&["seat"], ""));
        let solution = handle
            .try_solve(&provider, Mode::Quick, &[])
            .expect("empty vocabulary is not an error");
        assert!(solution.words.is_empty());
        assert_eq!(solution.summary.vocabulary_size, 0);
    }
}
