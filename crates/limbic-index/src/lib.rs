//! # limbic-index
//!
//! k-nearest-neighbour search over the VAD emotion lexicon: a flat-arena
//! KD-tree, a bounded candidate heap, five interchangeable similarity
//! models and the query option grammar that picks between them.
//!
//! The index is an immutable snapshot. Build once from a validated entry
//! list, then serve any number of concurrent reads; a changed lexicon
//! means building a new snapshot, never mutating a live one.
//!
//! ```text
//! limbic-index
//! ├── engine         VadIndex: snapshot + query orchestration
//! ├── tree           arena nodes and iterative construction
//! │   └── builder    median-split build, axis scale statistics
//! ├── search         traversal machinery
//! │   ├── heap       bounded max-heap of candidates
//! │   └── traversal  pruning descent with an explicit stack
//! ├── options        query option grammar parser
//! ├── similarity     the five scoring models
//! └── response       serde response shapes and the hit formatter
//! ```

pub mod engine;
pub mod options;
pub mod response;
pub mod search;
pub mod similarity;
pub mod tree;

pub use engine::VadIndex;
pub use options::QueryOptions;
pub use response::{
    ErrorResponse, NeutralResponse, OutputShape, QueryMode, RankedHit, SearchResponse,
    SearchResults,
};
pub use similarity::SimilarityModel;
pub use tree::KdTree;
