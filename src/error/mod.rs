//! Error types for the flashtext crate.
//!
//! The in-memory core has no exceptional failure modes: lookups and
//! removals report absence through `Option`/`bool`. Errors exist only at
//! the edges — rejecting empty keywords and propagating I/O failures from
//! keyword-file loading.

use thiserror::Error;

/// Result type alias used throughout the flashtext crate.
pub type FlashtextResult<T> = Result<T, FlashtextError>;

/// Errors that can occur in keyword processor operations.
#[derive(Error, Debug)]
pub enum FlashtextError {
    /// Error when an empty keyword is provided.
    ///
    /// An empty keyword would place a terminal value directly under the
    /// trie root and is rejected instead.
    #[error("Empty keyword not allowed")]
    EmptyKeyword,

    /// IO errors that may occur while loading keywords from a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
