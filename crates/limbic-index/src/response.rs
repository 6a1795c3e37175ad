//! Serde response shapes and the ranked-hit formatter.
//!
//! Every query resolves to exactly one of three shapes: populated
//! results, the fixed neutral sentinel, or `{"error": reason}`. The
//! sentinel and the error reasons are wire contracts consumed by
//! downstream hosts and must not be reworded.

use limbic_core::{AxisScale, EmotionEntry, SearchError, VadPoint};
use serde::Serialize;

use crate::search::Hit;
use crate::similarity::{intensity_label, SimilarityModel};

/// Which fields a rendered hit carries, selected by the output flag.
///
/// One formatter serves every flag; the shape only toggles field
/// presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Percentage always present; descriptive label only for the
    /// Gaussian family.
    Full,
    /// No percentage; descriptive label always present.
    Simplified,
}

impl OutputShape {
    /// `S` selects the simplified shape. `B`, `D`, `E`, an unknown
    /// letter or no flag at all select the full shape.
    pub fn from_flag(flag: Option<char>) -> Self {
        match flag {
            Some('S') => Self::Simplified,
            _ => Self::Full,
        }
    }
}

/// One rendered hit, ranked from 1. The coordinate serializes flat,
/// mirroring the lexicon record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHit {
    pub rank: usize,
    pub label: String,
    pub squared_distance: f64,
    #[serde(flatten)]
    pub point: VadPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_percent: Option<u8>,
    pub similarity_metric: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified_label: Option<String>,
}

/// Echo of the parsed query mode, tokens verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryMode {
    pub traversal: String,
    pub similarity: String,
    /// Flag letter, or empty when none was given.
    pub flag: String,
    /// Effective neighbor count after clamping to the lexicon size.
    pub k: usize,
    /// Radius as received, echoed even when the traversal ignores it.
    pub d: f64,
}

/// Populated search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub query: VadPoint,
    pub mode: QueryMode,
    pub result: Vec<RankedHit>,
    pub count: usize,
}

/// Fixed response for the reserved neutral (exact-origin) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NeutralResponse {
    pub emotion: &'static str,
    pub magnitude: u8,
    pub similarity: u8,
}

impl NeutralResponse {
    /// `{"emotion": "neutral", "magnitude": 0, "similarity": 1}`,
    /// integer-valued, preserved byte for byte.
    pub fn sentinel() -> Self {
        Self {
            emotion: "neutral",
            magnitude: 0,
            similarity: 1,
        }
    }
}

/// `{"error": reason}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<SearchError> for ErrorResponse {
    fn from(err: SearchError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// The three mutually exclusive response shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Results(SearchResults),
    Neutral(NeutralResponse),
    Error(ErrorResponse),
}

impl SearchResponse {
    /// The populated results, if this response carries any.
    pub fn results(&self) -> Option<&SearchResults> {
        match self {
            Self::Results(results) => Some(results),
            _ => None,
        }
    }

    /// The error reason, if this response is a rejection.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(&err.error),
            _ => None,
        }
    }
}

/// Scoring inputs shared by every hit of one query.
pub(crate) struct RenderContext<'a> {
    pub query: &'a VadPoint,
    pub entries: &'a [EmotionEntry],
    pub scale: &'a AxisScale,
    pub model: SimilarityModel,
    pub shape: OutputShape,
    pub radius: f64,
    pub sigma: f64,
}

/// Render traversal hits into ranked form.
///
/// Hits arrive ascending by squared distance with validated item
/// indices; ranks restart from 1 for every query.
pub(crate) fn render_hits(hits: &[Hit], ctx: &RenderContext<'_>) -> Vec<RankedHit> {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            let entry = &ctx.entries[hit.item];
            let percent = ctx
                .model
                .percent(ctx.query, &entry.point, ctx.radius, ctx.sigma, ctx.scale);
            let labelled = match ctx.shape {
                OutputShape::Simplified => true,
                OutputShape::Full => ctx.model.is_gaussian(),
            };
            RankedHit {
                rank: i + 1,
                label: entry.term.clone(),
                squared_distance: hit.distance_sq,
                point: entry.point,
                similarity_percent: match ctx.shape {
                    OutputShape::Full => Some(percent),
                    OutputShape::Simplified => None,
                },
                similarity_metric: ctx.model.metric_name(),
                simplified_label: labelled
                    .then(|| format!("{} {}", intensity_label(percent), entry.term)),
            }
        })
        .collect()
}
