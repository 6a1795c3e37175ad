//! Reward: weighted positive engagement.

use limbic_core::{DynamicsConfig, VadPoint};

use crate::sample::VadSample;

/// Instantaneous reward in `[0, 1]`: high valence and high arousal both
/// raise it. No dampening; a pleasant resting state still counts.
pub fn instant(point: &VadPoint, config: &DynamicsConfig) -> f64 {
    let from_valence = config.weights.reward_valence * ((point.valence + 1.0) / 2.0);
    let from_arousal = config.weights.reward_arousal * point.arousal;
    (from_valence + from_arousal).clamp(0.0, 1.0)
}

/// Time-weighted reward integral over the history, with the same
/// stepping rules as the stress integral.
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
