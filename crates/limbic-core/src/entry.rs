//! Lexicon entries: an emotion term anchored at a VAD coordinate.

use serde::{Deserialize, Serialize};

use crate::point::VadPoint;

/// One emotion lexicon entry.
///
/// Serializes flat, matching the on-disk dataset records:
/// `{"term": "...", "valence": .., "arousal": .., "dominance": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub term: String,
    #[serde(flatten)]
    pub point: VadPoint,
}

impl EmotionEntry {
    pub fn new(term: impl Into<String>, valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            term: term.into(),
            point: VadPoint::new(valence, arousal, dominance),
        }
    }
}
