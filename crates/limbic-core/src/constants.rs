//! Engine-wide numeric constants.

/// Limbic workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Floor applied to each axis standard deviation so whitened scoring
/// never divides by zero on a degenerate (constant-axis) lexicon.
pub const MIN_AXIS_SCALE: f64 = 1e-6;

/// Largest Euclidean distance between two points of the `[-1, 1]^3`
/// affect cube: the main diagonal, `2 * sqrt(3)`.
pub const MAX_L2_DISTANCE: f64 = 2.0 * 1.732_050_807_568_877_2;
