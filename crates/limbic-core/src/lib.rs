//! # limbic-core
//!
//! Shared foundation for the limbic affect engine: the VAD coordinate
//! model, the emotion lexicon types, error taxonomies and the layered
//! configuration used by the index and dynamics crates.
//!
//! ```text
//! limbic-core
//! ├── point        VAD coordinates and split axes
//! ├── entry        lexicon entries (term + coordinate)
//! ├── scale        per-axis standard deviation for whitened scoring
//! ├── dataset      JSON lexicon loader with strict validation
//! ├── config       serde config sections over compiled defaults
//! ├── constants    engine-wide numeric constants
//! └── errors       dataset / search / config error enums
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod entry;
pub mod errors;
pub mod point;
pub mod scale;

pub use config::{DynamicsConfig, DynamicsWeights, LimbicConfig, SearchConfig};
pub use entry::EmotionEntry;
pub use errors::{ConfigError, DatasetError, SearchError};
pub use point::{Axis, VadPoint};
pub use scale::AxisScale;
