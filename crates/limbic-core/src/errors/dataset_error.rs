//! Load-time failures for the VAD emotion lexicon.

use thiserror::Error;

/// Errors raised while loading or validating the emotion lexicon.
///
/// Any failure aborts the whole load; callers never receive a partial
/// entry list.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset root is not an array")]
    NotAnArray,

    #[error("entry {index}: missing or invalid field `{field}`")]
    MissingField { index: usize, field: &'static str },
}
