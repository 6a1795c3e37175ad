//! Property tests for the VAD coordinate model.

use limbic_core::constants::MIN_AXIS_SCALE;
use limbic_core::{Axis, AxisScale, VadPoint};
use proptest::prelude::*;

fn any_point() -> impl Strategy<Value = VadPoint> {
    (-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0)
        .prop_map(|(v, a, d)| VadPoint::new(v, a, d))
}

proptest! {
    #[test]
    fn distance_sq_is_symmetric_and_non_negative(a in any_point(), b in any_point()) {
        let ab = a.distance_sq(&b);
        let ba = b.distance_sq(&a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero(p in any_point()) {
        prop_assert_eq!(p.distance_sq(&p), 0.0);
        prop_assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn distance_is_sqrt_of_distance_sq(a in any_point(), b in any_point()) {
        prop_assert!((a.distance(&b) - a.distance_sq(&b).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn components_cover_all_axes(p in any_point()) {
        let reassembled = VadPoint::new(
            p.component(Axis::Valence),
            p.component(Axis::Arousal),
            p.component(Axis::Dominance),
        );
        prop_assert_eq!(reassembled, p);
    }

    #[test]
    fn axis_scale_never_drops_below_floor(
        v in -2.0f64..=2.0,
        a in -2.0f64..=2.0,
        d in -2.0f64..=2.0,
    ) {
        let scale = AxisScale::new(v, a, d);
        prop_assert!(scale.valence >= MIN_AXIS_SCALE);
        prop_assert!(scale.arousal >= MIN_AXIS_SCALE);
        prop_assert!(scale.dominance >= MIN_AXIS_SCALE);
    }
}
