//! Shared types and utilities for the wordgrid solver.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Board alphabet classification (letters vs. blanks)
//! - [`pos`] -- Grid positions and the 8-neighbor offset table
//! - [`config`] -- Solver configuration: word-list sources, profiles, limits
//! - [`summary`] -- Plain-data solve statistics for downstream reporting

pub mod alphabet;
pub mod config;
pub mod pos;
pub mod summary;

pub use config::{Mode, SolverConfig, SourceFilter, WordSource, DEFAULT_MIN_WORD_LEN};
pub use pos::Pos;
pub use summary::SolveSummary;
