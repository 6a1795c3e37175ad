//! Affect velocity and lability, the emotional-whiplash measure.

use limbic_core::DynamicsConfig;

use crate::metrics::AffectDelta;
use crate::sample::VadSample;

/// Per-second rate of change between two samples.
///
/// A non-positive interval (clock skew, identical timestamps) falls
/// back to one second so the delta degrades to a plain difference
/// instead of blowing up.
pub fn delta(previous: &VadSample, current: &VadSample) -> AffectDelta {
    let dt = current.seconds_since(previous);
    let dt = if dt <= 0.0 { 1.0 } else { dt };
    AffectDelta {
        valence: (current.point.valence - previous.point.valence) / dt,
        arousal: (current.point.arousal - previous.point.arousal) / dt,
        dominance: (current.point.dominance - previous.point.dominance) / dt,
    }
}

/// Lability in `(0, 1)`: how steeply the affect trajectory climbs or
/// dives along the dominance axis, squashed through a sigmoid.
///
/// The slope angle is `atan2(delta_dominance, |horizontal velocity|)`;
/// `gain` sharpens the response and `threshold` shifts the angle at
/// which lability crosses 0.5. A still trajectory (zero delta) lands
/// exactly on the sigmoid midpoint.
pub fn lability(delta: &AffectDelta, config: &DynamicsConfig) -> f64 {
    let horizontal = (delta.valence * delta.valence + delta.arousal * delta.arousal).sqrt();
    let angle = delta.dominance.atan2(horizontal);
    sigmoid(config.lability_gain * (angle - config.lability_threshold))
}

/// Logistic function, split at zero so a large negative argument cannot
/// overflow `exp`.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
