//! Tunables for the affect dynamics engine.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::point::VadPoint;

/// Weights of the instant stress and reward formulas.
///
/// Stress leans on arousal, reward splits evenly; the shipped defaults
/// reflect that asymmetry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsWeights {
    pub stress_arousal: f64,
    pub stress_valence: f64,
    pub reward_valence: f64,
    pub reward_arousal: f64,
}

impl Default for DynamicsWeights {
    fn default() -> Self {
        Self {
            stress_arousal: defaults::DEFAULT_STRESS_AROUSAL_WEIGHT,
            stress_valence: defaults::DEFAULT_STRESS_VALENCE_WEIGHT,
            reward_valence: defaults::DEFAULT_REWARD_VALENCE_WEIGHT,
            reward_arousal: defaults::DEFAULT_REWARD_AROUSAL_WEIGHT,
        }
    }
}

/// Configuration of the affect dynamics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    /// Reference affect state deviations are measured against.
    pub baseline: VadPoint,
    /// Distance from the baseline within which affect counts as stable.
    pub stability_radius: f64,
    /// Multiplier applied to instant stress inside the stability radius.
    pub dampening_factor: f64,
    /// Formula weights for stress and reward.
    pub weights: DynamicsWeights,
    /// Sigmoid gain of the lability formula.
    pub lability_gain: f64,
    /// Slope angle (radians) at which lability crosses 0.5.
    pub lability_threshold: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            baseline: VadPoint::ORIGIN,
            stability_radius: defaults::DEFAULT_STABILITY_RADIUS,
            dampening_factor: defaults::DEFAULT_DAMPENING_FACTOR,
            weights: DynamicsWeights::default(),
            lability_gain: defaults::DEFAULT_LABILITY_GAIN,
            lability_threshold: defaults::DEFAULT_LABILITY_THRESHOLD,
        }
    }
}
