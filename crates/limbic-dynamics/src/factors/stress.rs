//! Stress: weighted discomfort, dampened while affect sits near the
//! configured baseline.

use limbic_core::{DynamicsConfig, VadPoint};

use crate::sample::VadSample;

/// Instantaneous stress in `[0, 1]`.
///
/// Low valence and high arousal both raise it. Within the stability
/// radius of the baseline the dampening factor applies, so ordinary
/// resting wobble does not register as strain.
pub fn instant(point: &VadPoint, config: &DynamicsConfig) -> f64 {
    let deviation = point.distance(&config.baseline);
    let dampening = if deviation <= config.stability_radius {
        config.dampening_factor
    } else {
        1.0
    };
    let from_valence = config.weights.stress_valence * ((1.0 - point.valence) / 2.0);
    let from_arousal = config.weights.stress_arousal * point.arousal;
    (from_valence + from_arousal).clamp(0.0, 1.0) * dampening
}

/// Time-weighted stress integral over the history, oldest first.
///
/// Each step contributes the instant stress of its newer sample times
/// the elapsed seconds; a non-positive interval falls back to 0.1s.
/// Fewer than two samples integrate to zero.
pub fn cumulative(history: &[VadSample], config: &DynamicsConfig) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    history
        .windows(2)
        .map(|pair| {
            let dt = pair[1].seconds_since(&pair[0]);
            let dt = if dt <= 0.0 { 0.1 } else { dt };
            instant(&pair[1].point, config) * dt
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(v: f64, a: f64, d: f64, secs: i64) -> VadSample {
        VadSample::new(
            VadPoint::new(v, a, d),
            Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap(),
        )
    }

    #[test]
    fn raw_stress_clamps_to_the_unit_interval() {
        // Overweighted on purpose: worst-case input sums to 1.4.
        let config = DynamicsConfig {
            weights: limbic_core::DynamicsWeights {
                stress_valence: 0.5,
                stress_arousal: 0.9,
                ..Default::default()
            },
            ..DynamicsConfig::default()
        };
        let distressed = instant(&VadPoint::new(-1.0, 1.0, -0.5), &config);
        assert_eq!(distressed, 1.0);

        // High valence, negative arousal clamps at zero from below.
        let serene = instant(&VadPoint::new(0.9, -0.8, 0.3), &DynamicsConfig::default());
        assert_eq!(serene, 0.0);
    }

    #[test]
    fn dampening_applies_only_inside_the_stability_radius() {
        let config = DynamicsConfig::default();
        let inside = VadPoint::new(0.0, 0.25, 0.0);
        let outside = VadPoint::new(0.0, 0.5, 0.0);
        let raw_inside = 0.3 * 0.5 + 0.7 * 0.25;
        let raw_outside = 0.3 * 0.5 + 0.7 * 0.5;
        assert!((instant(&inside, &config) - raw_inside * 0.08).abs() < 1e-12);
        assert!((instant(&outside, &config) - raw_outside).abs() < 1e-12);
    }

    #[test]
    fn boundary_of_the_radius_still_dampens() {
        let config = DynamicsConfig {
            stability_radius: 0.25,
            ..DynamicsConfig::default()
        };
        // Exactly at the radius along one axis.
        let on_edge = VadPoint::new(0.0, 0.25, 0.0);
        let raw = 0.3 * 0.5 + 0.7 * 0.25;
        assert!((instant(&on_edge, &config) - raw * config.dampening_factor).abs() < 1e-12);
    }

    #[test]
    fn cumulative_needs_at_least_two_samples() {
        let config = DynamicsConfig::default();
        assert_eq!(cumulative(&[], &config), 0.0);
        assert_eq!(cumulative(&[sample(-0.5, 0.8, 0.0, 0)], &config), 0.0);
    }

    #[test]
    fn cumulative_weights_by_elapsed_seconds() {
        let config = DynamicsConfig::default();
        let history = [
            sample(-0.5, 0.8, 0.0, 0),
            sample(-0.5, 0.8, 0.0, 2),
            sample(-0.5, 0.8, 0.0, 5),
        ];
        let per_instant = instant(&history[1].point, &config);
        let got = cumulative(&history, &config);
        assert!((got - per_instant * 5.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_interval_falls_back() {
        let config = DynamicsConfig::default();
        let history = [sample(-0.5, 0.8, 0.0, 10), sample(-0.5, 0.8, 0.0, 10)];
        let per_instant = instant(&history[1].point, &config);
        let got = cumulative(&history, &config);
        assert!((got - per_instant * 0.1).abs() < 1e-12);
    }
}
