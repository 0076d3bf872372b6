//! Grid model and word-search engine.
//!
//! Takes an adjacency-annotated letter grid and a sorted vocabulary and
//! enumerates every vocabulary word spellable as a trail of distinct,
//! pairwise-adjacent, non-empty cells.
//!
//! # Architecture
//!
//! - [`grid`] -- Board construction with precomputed 8-neighbor adjacency
//! - [`index`] -- Sorted vocabulary and binary-search prefix narrowing
//! - [`search`] -- Recursive prefix-pruned depth-first search

pub mod grid;
pub mod index;
pub mod search;

pub use grid::Grid;
pub use index::{PrefixRange, Vocabulary};
pub use search::{search, search_with, Deadline, SearchOutcome};

/// Error type for board construction.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The board description contained no rows at all.
    #[error("malformed board: no rows")]
    NoRows,
    /// Every row was empty, leaving a board with no columns.
    #[error("malformed board: rows have no columns")]
    NoColumns,
}
