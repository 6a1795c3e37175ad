//! # limbic-dynamics
//!
//! Affect dynamics over VAD histories: instantaneous stress and reward,
//! their balance, affective lability (emotional whiplash), and the
//! trajectory statistics of where affect has been.
//!
//! All factor formulas are pure functions over samples and a
//! [`DynamicsConfig`]; the engine only orchestrates them, running the
//! independent metric groups in parallel for one-shot analysis.
//!
//! ```text
//! limbic-dynamics
//! ├── sample        timestamped VAD samples and the analysis snapshot
//! ├── metrics       the instant / dynamic / cumulative result bundles
//! ├── factors       pure formulas
//! │   ├── stress      weighted discomfort, dampened near baseline
//! │   ├── reward      weighted positive engagement
//! │   ├── lability    velocity and the whiplash sigmoid
//! │   └── trajectory  centroid and spread of the visited region
//! └── engine        parallel evaluation and assembly
//! ```
//!
//! [`DynamicsConfig`]: limbic_core::DynamicsConfig

pub mod engine;
pub mod factors;
pub mod metrics;
pub mod sample;

pub use engine::DynamicsEngine;
pub use metrics::{
    AffectAnalysis, AffectDelta, CumulativeMetrics, DynamicMetrics, InstantMetrics,
    TrajectoryArea,
};
pub use sample::{AffectSnapshot, VadSample};
