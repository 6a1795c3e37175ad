//! Query-time failures of the VAD index.

use thiserror::Error;

/// Reasons a search request is rejected.
///
/// The `Display` strings are the exact reason texts carried by the
/// `{"error": ...}` response shape, so they must not be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The index holds no entries.
    #[error("empty_tree")]
    EmptyTree,

    /// The requested neighbor count is zero or negative.
    #[error("k is 0 or minus")]
    NonPositiveK,

    /// The traversal met an out-of-range arena or entry reference.
    /// The query is abandoned whole; no partial result escapes.
    #[error("search fail")]
    TraversalFailed,
}
