//! Pure factor formulas. Everything here is a deterministic function of
//! its arguments; the engine owns ordering and parallelism.

pub mod lability;
pub mod reward;
pub mod stress;
pub mod trajectory;

/// A total below this counts as zero when forming ratios.
const RATIO_EPSILON: f64 = 1e-9;

/// Stress/reward balance shared by the instant and cumulative groups.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Balance {
    pub total: f64,
    pub stress_ratio: f64,
    pub reward_ratio: f64,
}

/// Normalize a stress/reward pair. A vanishing total yields zero ratios
/// rather than dividing through by it.
pub(crate) fn balance(stress: f64, reward: f64) -> Balance {
    let total = stress + reward;
    if total > RATIO_EPSILON {
        Balance {
            total,
            stress_ratio: stress / total,
            reward_ratio: reward / total,
        }
    } else {
        Balance {
            total,
            stress_ratio: 0.0,
            reward_ratio: 0.0,
        }
    }
}
