//! Property tests: factor bounds and analysis determinism over random
//! affect histories.

use chrono::{TimeZone, Utc};
use limbic_core::{DynamicsConfig, VadPoint};
use limbic_dynamics::{factors, AffectSnapshot, DynamicsEngine, VadSample};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = VadPoint> {
    (-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0)
        .prop_map(|(v, a, d)| VadPoint::new(v, a, d))
}

/// History with strictly increasing timestamps, oldest first.
fn arb_history() -> impl Strategy<Value = Vec<VadSample>> {
    prop::collection::vec((arb_point(), 1i64..120), 1..24).prop_map(|steps| {
        let mut clock = 1_700_000_000i64;
        steps
            .into_iter()
            .map(|(point, gap)| {
                clock += gap;
                VadSample::new(point, Utc.timestamp_opt(clock, 0).unwrap())
            })
            .collect()
    })
}

fn snapshot_of(history: Vec<VadSample>) -> AffectSnapshot {
    let current = history[history.len() - 1];
    let previous = history.len().checked_sub(2).map(|i| history[i]);
    AffectSnapshot {
        current,
        previous,
        history,
    }
}

proptest! {
    /// Instant stress and reward never leave the unit interval.
    #[test]
    fn instant_factors_stay_in_unit_interval(point in arb_point()) {
        let config = DynamicsConfig::default();
        let stress = factors::stress::instant(&point, &config);
        let reward = factors::reward::instant(&point, &config);
        prop_assert!((0.0..=1.0).contains(&stress));
        prop_assert!((0.0..=1.0).contains(&reward));
    }

    /// Ratios either vanish together or partition the total.
    #[test]
    fn ratios_vanish_or_partition(history in arb_history()) {
        let engine = DynamicsEngine::new();
        let analysis = engine.analyze(&snapshot_of(history));

        for (total, s, r) in [
            (
                analysis.instant.ratio_total,
                analysis.instant.stress_ratio,
                analysis.instant.reward_ratio,
            ),
            (
                analysis.cumulative.total,
                analysis.cumulative.stress_ratio,
                analysis.cumulative.reward_ratio,
            ),
        ] {
            if total > 1e-9 {
                prop_assert!((s + r - 1.0).abs() < 1e-9);
            } else {
                prop_assert_eq!(s, 0.0);
                prop_assert_eq!(r, 0.0);
            }
        }
    }

    /// Lability is a proper sigmoid output for any finite velocity.
    #[test]
    fn lability_stays_strictly_inside_unit_interval(
        dv in -50.0f64..50.0,
        da in -50.0f64..50.0,
        dd in -50.0f64..50.0,
    ) {
        let config = DynamicsConfig::default();
        let delta = limbic_dynamics::AffectDelta {
            valence: dv,
            arousal: da,
            dominance: dd,
        };
        let lability = factors::lability::lability(&delta, &config);
        prop_assert!(lability > 0.0);
        prop_assert!(lability < 1.0);
    }

    /// The integrals are non-negative and grow with history length.
    #[test]
    fn integrals_are_monotone_in_history_prefix(history in arb_history()) {
        let config = DynamicsConfig::default();
        let full_stress = factors::stress::cumulative(&history, &config);
        let full_reward = factors::reward::cumulative(&history, &config);
        prop_assert!(full_stress >= 0.0);
        prop_assert!(full_reward >= 0.0);

        let prefix = &history[..history.len() - 1];
        prop_assert!(factors::stress::cumulative(prefix, &config) <= full_stress + 1e-12);
        prop_assert!(factors::reward::cumulative(prefix, &config) <= full_reward + 1e-12);
    }

    /// Trajectory centers on the samples it was given.
    #[test]
    fn trajectory_center_is_inside_the_cube(history in arb_history()) {
        let area = factors::trajectory::average(&history);
        prop_assert!(area.center.valence.abs() <= 1.0 + 1e-9);
        prop_assert!(area.center.arousal.abs() <= 1.0 + 1e-9);
        prop_assert!(area.center.dominance.abs() <= 1.0 + 1e-9);
        prop_assert!(area.radius >= 0.0);
    }

    /// Two runs over the same snapshot agree exactly: the parallel join
    /// introduces no nondeterminism.
    #[test]
    fn analysis_is_deterministic(history in arb_history()) {
        let engine = DynamicsEngine::new();
        let snapshot = snapshot_of(history);
        let first = engine.analyze(&snapshot);
        let second = engine.analyze(&snapshot);
        prop_assert_eq!(first, second);
    }
}
