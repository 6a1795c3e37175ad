//! One-shot parallel evaluation of the three metric groups.

use limbic_core::DynamicsConfig;
use tracing::debug;

use crate::factors::{self, Balance};
use crate::metrics::{
    AffectAnalysis, AffectDelta, CumulativeMetrics, DynamicMetrics, InstantMetrics,
};
use crate::sample::AffectSnapshot;

/// Evaluates affect dynamics for snapshots against one configuration.
///
/// The engine holds no state beyond its config; `analyze` reads the
/// snapshot it is given and nothing else, so one engine can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct DynamicsEngine {
    config: DynamicsConfig,
}

/// Instant-group intermediate: everything derivable from `current` and
/// `previous` alone.
struct InstantBundle {
    delta: AffectDelta,
    stress: f64,
    reward: f64,
    balance: Balance,
    lability: f64,
    deviation: f64,
}

impl DynamicsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DynamicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DynamicsConfig {
        &self.config
    }

    /// Compute all metric groups for one snapshot.
    ///
    /// The trajectory pass, the cumulative integrals and the O(1)
    /// instant bundle are independent pure functions; they run as a
    /// nested `rayon::join` over the borrowed snapshot and are all
    /// joined before this returns.
    pub fn analyze(&self, snapshot: &AffectSnapshot) -> AffectAnalysis {
        let (trajectory, (cumulative, instant)) = rayon::join(
            || factors::trajectory::average(&snapshot.history),
            || {
                rayon::join(
                    || self.cumulative_balance(snapshot),
                    || self.instant_bundle(snapshot),
                )
            },
        );
        debug!(
            history = snapshot.history.len(),
            stress = instant.stress,
            reward = instant.reward,
            "affect analysis complete"
        );

        AffectAnalysis {
            instant: InstantMetrics {
                stress: instant.stress,
                reward: instant.reward,
                ratio_total: instant.balance.total,
                stress_ratio: instant.balance.stress_ratio,
                reward_ratio: instant.balance.reward_ratio,
                deviation: instant.deviation,
            },
            dynamics: DynamicMetrics {
                delta: instant.delta,
                affective_lability: instant.lability,
            },
            cumulative: CumulativeMetrics {
                trajectory,
                stress: cumulative.0,
                reward: cumulative.1,
                total: cumulative.2.total,
                stress_ratio: cumulative.2.stress_ratio,
                reward_ratio: cumulative.2.reward_ratio,
            },
        }
    }

    fn cumulative_balance(&self, snapshot: &AffectSnapshot) -> (f64, f64, Balance) {
        let stress = factors::stress::cumulative(&snapshot.history, &self.config);
        let reward = factors::reward::cumulative(&snapshot.history, &self.config);
        let balance = factors::balance(stress, reward);
        (stress, reward, balance)
    }

    fn instant_bundle(&self, snapshot: &AffectSnapshot) -> InstantBundle {
        let point = &snapshot.current.point;
        let delta = snapshot
            .previous
            .as_ref()
            .map(|previous| factors::lability::delta(previous, &snapshot.current))
            .unwrap_or_default();
        let stress = factors::stress::instant(point, &self.config);
        let reward = factors::reward::instant(point, &self.config);
        let balance = factors::balance(stress, reward);
        let lability = factors::lability::lability(&delta, &self.config);
        let deviation = point.distance(&self.config.baseline);
        InstantBundle {
            delta,
            stress,
            reward,
            balance,
            lability,
            deviation,
        }
    }
}
