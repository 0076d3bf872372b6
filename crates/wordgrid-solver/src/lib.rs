//! Dictionary assembly and solve orchestration.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Merge word-list sources and seed words into a vocabulary
//! - [`denylist`] -- Proper-noun denylist loading and partitioning
//! - [`handle`] -- `SolverHandle`: board provider seam, pipeline, results

pub mod denylist;
pub mod handle;
pub mod lexicon;

pub use denylist::Denylist;
pub use handle::{
    BoardProvider, BoardUnavailableError, DailyBoard, SolveError, Solution, SolverHandle,
};
