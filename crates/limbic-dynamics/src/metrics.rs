//! Result bundles produced by the dynamics engine.

use limbic_core::VadPoint;
use serde::{Deserialize, Serialize};

/// Rate of change of the affect state, per axis per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AffectDelta {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

/// Point-in-time metrics of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstantMetrics {
    /// Weighted discomfort in `[0, 1]`, dampened near the baseline.
    pub stress: f64,
    /// Weighted positive engagement in `[0, 1]`.
    pub reward: f64,
    /// `stress + reward` before normalization.
    pub ratio_total: f64,
    /// Share of stress in the total; zero when the total vanishes.
    pub stress_ratio: f64,
    /// Share of reward in the total; zero when the total vanishes.
    pub reward_ratio: f64,
    /// Euclidean distance from the configured baseline.
    pub deviation: f64,
}

/// Rate-of-change metrics between the previous and current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicMetrics {
    pub delta: AffectDelta,
    /// Emotional whiplash in `(0, 1)`: the sigmoid of how steeply the
    /// trajectory climbs the dominance axis.
    pub affective_lability: f64,
}

/// Centroid of the visited affect region and its mean radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryArea {
    pub center: VadPoint,
    pub radius: f64,
}

/// History-integrated metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeMetrics {
    pub trajectory: TrajectoryArea,
    /// Time-weighted stress integral over the history.
    pub stress: f64,
    /// Time-weighted reward integral over the history.
    pub reward: f64,
    pub total: f64,
    pub stress_ratio: f64,
    pub reward_ratio: f64,
}

/// Full analysis: the three metric groups of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectAnalysis {
    pub instant: InstantMetrics,
    pub dynamics: DynamicMetrics,
    pub cumulative: CumulativeMetrics,
}
