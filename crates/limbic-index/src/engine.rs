//! The VAD index snapshot and its query orchestration.

use limbic_core::{AxisScale, EmotionEntry, SearchError, VadPoint};
use tracing::{debug, info};

use crate::options::QueryOptions;
use crate::response::{
    render_hits, NeutralResponse, OutputShape, QueryMode, RenderContext, SearchResponse,
    SearchResults,
};
use crate::search::{traverse, VisitPolicy};
use crate::similarity::SimilarityModel;
use crate::tree::{builder, KdTree};

/// An immutable index over one emotion lexicon snapshot.
///
/// Holds the entry table, the KD-tree over it and the per-axis scale
/// statistics computed at build time. A `VadIndex` never mutates after
/// construction: concurrent reads need no locking, and a changed
/// lexicon is served by building a fresh index and swapping it in.
#[derive(Debug, Clone)]
pub struct VadIndex {
    entries: Vec<EmotionEntry>,
    tree: KdTree,
    scale: AxisScale,
}

impl VadIndex {
    /// Build an index from a validated entry list.
    pub fn build(entries: Vec<EmotionEntry>) -> Self {
        let tree = builder::build(&entries);
        let scale = builder::axis_scale(&entries);
        debug!(
            entries = entries.len(),
            nodes = tree.len(),
            "built VAD index"
        );
        Self {
            entries,
            tree,
            scale,
        }
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The indexed entries, in load order.
    pub fn entries(&self) -> &[EmotionEntry] {
        &self.entries
    }

    /// Per-axis scale statistics of this snapshot.
    pub fn axis_scale(&self) -> &AxisScale {
        &self.scale
    }

    /// The tree arena, exposed for diagnostics.
    pub fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// Run a query, folding every outcome into a response shape.
    ///
    /// `k` is accepted as a signed count so hosts can pass through
    /// unchecked input; zero and negative values are rejected, values
    /// beyond the lexicon size are clamped silently. `d` is the search
    /// radius for the radius-bounded traversal and the reference radius
    /// of the d-relative model; `sigma` is the Gaussian width; `opt` is
    /// the option string.
    pub fn search(&self, query: VadPoint, k: i64, d: f64, sigma: f64, opt: &str) -> SearchResponse {
        match self.try_search(query, k, d, sigma, opt) {
            Ok(response) => response,
            Err(err) => {
                debug!(%err, "query rejected");
                SearchResponse::Error(err.into())
            }
        }
    }

    /// Typed counterpart of [`search`]: rejections surface as
    /// [`SearchError`] instead of the error shape.
    ///
    /// Pre-checks run in a fixed order. An empty index rejects every
    /// query, even the neutral one. The exact-origin query short-circuits
    /// to the sentinel before `k` is examined, so `(origin, k = 0)` is
    /// neutral, not an error.
    ///
    /// [`search`]: Self::search
    pub fn try_search(
        &self,
        query: VadPoint,
        k: i64,
        d: f64,
        sigma: f64,
        opt: &str,
    ) -> Result<SearchResponse, SearchError> {
        if self.tree.root().is_none() {
            return Err(SearchError::EmptyTree);
        }
        if query.is_origin() {
            return Ok(SearchResponse::Neutral(NeutralResponse::sentinel()));
        }
        if k <= 0 {
            return Err(SearchError::NonPositiveK);
        }
        let k = (k as usize).min(self.entries.len());

        let options = QueryOptions::parse(opt);
        let policy = if options.is_radius_bounded() {
            VisitPolicy::RadiusBounded { radius_sq: d * d }
        } else {
            VisitPolicy::Unbounded
        };
        let model = SimilarityModel::from_token(&options.similarity);
        let shape = OutputShape::from_flag(options.flag);

        let mut hits = traverse(&self.tree, &self.entries, &query, k, policy)?;
        hits.truncate(k);

        let ranked = render_hits(
            &hits,
            &RenderContext {
                query: &query,
                entries: &self.entries,
                scale: &self.scale,
                model,
                shape,
                radius: d,
                sigma,
            },
        );
        info!(
            k,
            hits = ranked.len(),
            traversal = %options.traversal,
            similarity = %options.similarity,
            "VAD search complete"
        );

        Ok(SearchResponse::Results(SearchResults {
            query,
            mode: QueryMode {
                traversal: options.traversal,
                similarity: options.similarity,
                flag: options.flag.map(String::from).unwrap_or_default(),
                k,
                d,
            },
            count: ranked.len(),
            result: ranked,
        }))
    }
}
