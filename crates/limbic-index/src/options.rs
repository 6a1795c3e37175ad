//! Query option grammar: `<traversal>[~<similarity>][ -<flag>]`.
//!
//! Parsing never fails. Unknown or malformed tokens degrade to the
//! documented defaults downstream, so a misspelled option still returns
//! results instead of an error.

/// Parsed query options.
///
/// Tokens are kept verbatim, not canonicalized: the response echoes back
/// exactly what resolution saw, including unknown tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Traversal token; empty input falls back to `"knn"`.
    pub traversal: String,
    /// Similarity token; `"none"` when the `~` separator was absent.
    pub similarity: String,
    /// Output flag letter, if the trailing part carried one.
    pub flag: Option<char>,
}

impl QueryOptions {
    /// Parse an option string.
    ///
    /// The main part runs to the first space; an optional `~` inside it
    /// splits traversal from similarity. In the trailing part only the
    /// first whitespace-delimited token is examined, and it carries a
    /// flag only when it is exactly two bytes starting with `-`.
    pub fn parse(opt: &str) -> Self {
        let opt = opt.trim();
        let (main, trailing) = match opt.split_once(' ') {
            Some((main, trailing)) => (main, trailing.trim()),
            None => (opt, ""),
        };

        let (traversal, similarity) = match main.split_once('~') {
            Some((traversal, similarity)) => (traversal, similarity.to_string()),
            None => (main, "none".to_string()),
        };
        let traversal = if traversal.is_empty() {
            "knn".to_string()
        } else {
            traversal.to_string()
        };

        let flag = trailing
            .split_whitespace()
            .next()
            .filter(|token| token.len() == 2 && token.starts_with('-'))
            .and_then(|token| token.chars().nth(1));

        Self {
            traversal,
            similarity,
            flag,
        }
    }

    /// Whether the traversal token selects the radius-bounded walk.
    /// Anything other than the exact token behaves as plain k-NN.
    pub fn is_radius_bounded(&self) -> bool {
        self.traversal == "knn_d"
    }
}
