// Solver configuration: word-list sources, vocabulary profiles, limits.
//
// All tunables (minimum word length, source table, denylist location,
// wall-clock budget) live in an explicit `SolverConfig` value handed to the
// orchestrator, so tests can run with varied configurations in parallel
// without touching shared state.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Shortest word the puzzle accepts. Shorter vocabulary entries are never
/// emitted even when traversable.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Vocabulary profile: speed against coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// Curated word lists only. Fast, finds the regular answers.
    Quick,
    /// The bulk unfiltered list, optionally seeded with a quick pass's
    /// findings. Slow, but the only realistic way to hit the bonus word.
    Exhaustive,
}

/// Filtering rule applied to a raw word-list source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFilter {
    /// The source is already curated; tokens are only trimmed.
    Prefiltered,
    /// The source is raw; keep only purely alphabetic tokens of at least
    /// the configured minimum length.
    Alphabetic,
}

/// One newline-delimited word-list source, identified by a stable key.
#[derive(Debug, Clone)]
pub struct WordSource {
    /// Stable identifier used in logs and diagnostics.
    pub key: String,
    /// Location of the newline-delimited token stream.
    pub path: PathBuf,
    /// Filtering rule for this source's tokens.
    pub filter: SourceFilter,
}

impl WordSource {
    pub fn prefiltered(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            filter: SourceFilter::Prefiltered,
        }
    }

    pub fn alphabetic(key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            filter: SourceFilter::Alphabetic,
        }
    }
}

/// Solver configuration passed to the orchestrator.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Minimum accepted word length.
    pub min_word_len: usize,
    /// Curated sources used by [`Mode::Quick`].
    pub curated_sources: Vec<WordSource>,
    /// The large unfiltered source used by [`Mode::Exhaustive`].
    pub bulk_source: Option<WordSource>,
    /// Location of the proper-noun denylist. `None` disables filtering.
    pub denylist_path: Option<PathBuf>,
    /// Wall-clock budget for one search. `None` means unbounded.
    pub budget: Option<Duration>,
    /// Worker threads for the search. `1` keeps the search sequential.
    pub threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            curated_sources: Vec::new(),
            bulk_source: None,
            denylist_path: None,
            budget: None,
            threads: 1,
        }
    }
}

impl SolverConfig {
    /// The word-list sources enabled for a profile.
    ///
    /// Quick uses the curated sources only; exhaustive uses the bulk source
    /// only (coverage comes from its size plus the caller's seed words).
    pub fn sources_for(&self, mode: Mode) -> Vec<WordSource> {
        match mode {
            Mode::Quick => self.curated_sources.clone(),
            Mode::Exhaustive => self.bulk_source.clone().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.min_word_len, 4);
        assert_eq!(config.threads, 1);
        assert!(config.budget.is_none());
        assert!(config.sources_for(Mode::Quick).is_empty());
        assert!(config.sources_for(Mode::Exhaustive).is_empty());
    }

    #[test]
    fn profile_source_selection() {
        let config = SolverConfig {
            curated_sources: vec![
                WordSource::prefiltered("curated", "/data/curated.txt"),
                WordSource::prefiltered("supplement", "/data/supplement.txt"),
            ],
            bulk_source: Some(WordSource::alphabetic("bulk", "/data/bulk.txt")),
            ..SolverConfig::default()
        };

        let quick = config.sources_for(Mode::Quick);
        let keys: Vec<&str> = quick.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["curated", "supplement"]);

        let exhaustive = config.sources_for(Mode::Exhaustive);
        assert_eq!(exhaustive.len(), 1);
        assert_eq!(exhaustive[0].key, "bulk");
        assert_eq!(exhaustive[0].filter, SourceFilter::Alphabetic);
    }
}
