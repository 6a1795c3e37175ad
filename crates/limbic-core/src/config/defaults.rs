//! Compiled default values for every configuration section.

/// Option string applied when a query passes none: plain k-NN with the
/// L2-normalized scorer in the full output shape.
pub const DEFAULT_OPTION: &str = "knn";

/// Neighbor count applied when a query passes none.
pub const DEFAULT_K: i64 = 5;

/// Search radius for the bounded traversal and the d-relative model.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Gaussian width for the RBF similarity models.
pub const DEFAULT_SIGMA: f64 = 0.5;

/// Distance from the baseline within which affect counts as stable.
pub const DEFAULT_STABILITY_RADIUS: f64 = 0.3;

/// Multiplier applied to instant stress inside the stability radius.
pub const DEFAULT_DAMPENING_FACTOR: f64 = 0.08;

/// Arousal weight of the instant stress formula.
pub const DEFAULT_STRESS_AROUSAL_WEIGHT: f64 = 0.7;

/// Valence weight of the instant stress formula.
pub const DEFAULT_STRESS_VALENCE_WEIGHT: f64 = 0.3;

/// Valence weight of the instant reward formula.
pub const DEFAULT_REWARD_VALENCE_WEIGHT: f64 = 0.5;

/// Arousal weight of the instant reward formula.
pub const DEFAULT_REWARD_AROUSAL_WEIGHT: f64 = 0.5;

/// Sigmoid gain of the affective lability formula.
pub const DEFAULT_LABILITY_GAIN: f64 = 0.5;

/// Slope angle (radians) at which lability crosses 0.5.
pub const DEFAULT_LABILITY_THRESHOLD: f64 = 0.0;
