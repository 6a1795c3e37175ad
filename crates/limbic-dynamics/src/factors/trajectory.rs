//! Centroid and spread of the visited affect region.

use limbic_core::VadPoint;

use crate::metrics::TrajectoryArea;
use crate::sample::VadSample;

/// Radius reported for an empty history: a minimal presence marker
/// rather than a zero-size region.
const EMPTY_RADIUS: f64 = 0.05;

/// Mean point of the history plus the mean distance of samples to it.
///
/// Two passes over the history; an empty history yields the origin with
/// [`EMPTY_RADIUS`], a single sample its own point with radius zero.
pub fn average(history: &[VadSample]) -> TrajectoryArea {
    if history.is_empty() {
        return TrajectoryArea {
            center: VadPoint::ORIGIN,
            radius: EMPTY_RADIUS,
        };
    }

    let n = history.len() as f64;
    let mut center = VadPoint::ORIGIN;
    for sample in history {
        center.valence += sample.point.valence;
        center.arousal += sample.point.arousal;
        center.dominance += sample.point.dominance;
    }
    center.valence /= n;
    center.arousal /= n;
    center.dominance /= n;

    let radius = history
        .iter()
        .map(|sample| sample.point.distance(&center))
        .sum::<f64>()
        / n;

    TrajectoryArea { center, radius }
}
