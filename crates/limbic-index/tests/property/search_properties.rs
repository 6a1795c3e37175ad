//! Property tests: tree search against brute force, radius containment
//! and scoring bounds over randomized lexicons.

use limbic_core::{AxisScale, EmotionEntry, VadPoint};
use limbic_index::{SimilarityModel, VadIndex};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = VadPoint> {
    (-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0)
        .prop_map(|(v, a, d)| VadPoint::new(v, a, d))
}

fn arb_entries() -> impl Strategy<Value = Vec<EmotionEntry>> {
    prop::collection::vec(
        (-1.0f64..=1.0, -1.0f64..=1.0, -1.0f64..=1.0),
        1..48,
    )
    .prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (v, a, d))| EmotionEntry::new(format!("term{i}"), v, a, d))
            .collect()
    })
}

const ALL_MODELS: [SimilarityModel; 5] = [
    SimilarityModel::Relative,
    SimilarityModel::L2Norm,
    SimilarityModel::Cosine,
    SimilarityModel::Gauss,
    SimilarityModel::GaussWhitened,
];

proptest! {
    /// Tree-pruned k-NN returns exactly the k smallest squared
    /// distances, ascending, with k clamped to the lexicon size.
    #[test]
    fn knn_distances_equal_brute_force(
        entries in arb_entries(),
        query in arb_point(),
        k in 1i64..64,
    ) {
        prop_assume!(!query.is_origin());
        let index = VadIndex::build(entries.clone());
        let response = index.search(query, k, 1.0, 0.5, "knn~l2");
        let results = response.results().unwrap();

        let mut expected: Vec<f64> = entries
            .iter()
            .map(|e| query.distance_sq(&e.point))
            .collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.truncate((k as usize).min(entries.len()));

        prop_assert_eq!(results.count, expected.len());
        prop_assert_eq!(results.result.len(), expected.len());
        for (hit, want) in results.result.iter().zip(&expected) {
            prop_assert_eq!(hit.squared_distance, *want);
        }
    }

    /// Radius-bounded search never admits a point beyond the radius and
    /// agrees with the filtered brute-force prefix.
    #[test]
    fn bounded_results_stay_within_radius(
        entries in arb_entries(),
        query in arb_point(),
        k in 1i64..64,
        radius in 0.0f64..2.0,
    ) {
        prop_assume!(!query.is_origin());
        let index = VadIndex::build(entries.clone());
        let response = index.search(query, k, radius, 0.5, "knn_d~l2");
        let results = response.results().unwrap();

        let mut expected: Vec<f64> = entries
            .iter()
            .map(|e| query.distance_sq(&e.point))
            .filter(|d2| *d2 <= radius * radius)
            .collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.truncate((k as usize).min(entries.len()));

        prop_assert_eq!(results.count, expected.len());
        for (hit, want) in results.result.iter().zip(&expected) {
            prop_assert_eq!(hit.squared_distance, *want);
            prop_assert!(hit.squared_distance <= radius * radius);
        }
    }

    /// Ranks are dense from 1 and every entry appears at most once.
    #[test]
    fn ranks_are_dense_and_hits_distinct(
        entries in arb_entries(),
        query in arb_point(),
        k in 1i64..64,
    ) {
        prop_assume!(!query.is_origin());
        let n = entries.len();
        let index = VadIndex::build(entries);
        let response = index.search(query, k, 1.0, 0.5, "knn");
        let results = response.results().unwrap();

        prop_assert_eq!(results.result.len(), (k as usize).min(n));
        let mut labels: Vec<&str> = Vec::with_capacity(results.result.len());
        for (i, hit) in results.result.iter().enumerate() {
            prop_assert_eq!(hit.rank, i + 1);
            prop_assert!(!labels.contains(&hit.label.as_str()));
            labels.push(&hit.label);
        }
    }

    /// Every model is a percentage and symmetric in its two points.
    #[test]
    fn scores_are_symmetric_percentages(
        a in arb_point(),
        b in arb_point(),
        radius in 0.0f64..3.0,
        sigma in 0.0f64..2.0,
        scale_v in 0.01f64..2.0,
        scale_a in 0.01f64..2.0,
        scale_d in 0.01f64..2.0,
    ) {
        let scale = AxisScale::new(scale_v, scale_a, scale_d);
        for model in ALL_MODELS {
            let ab = model.percent(&a, &b, radius, sigma, &scale);
            let ba = model.percent(&b, &a, radius, sigma, &scale);
            prop_assert!(ab <= 100);
            prop_assert_eq!(ab, ba);
        }
    }

    /// Whitening by a unit scale is the identity on the Gaussian model.
    #[test]
    fn unit_scale_whitening_matches_plain_gauss(
        a in arb_point(),
        b in arb_point(),
        sigma in 0.01f64..2.0,
    ) {
        let plain = SimilarityModel::Gauss.percent(&a, &b, 1.0, sigma, &AxisScale::UNIT);
        let whitened =
            SimilarityModel::GaussWhitened.percent(&a, &b, 1.0, sigma, &AxisScale::UNIT);
        prop_assert_eq!(plain, whitened);
    }

    /// With all-equal axis scales the whitened model keeps the plain
    /// Gaussian's distance ordering: closer never scores lower.
    #[test]
    fn equal_axis_scales_keep_gauss_ordering(
        query in arb_point(),
        a in arb_point(),
        b in arb_point(),
        s in 0.05f64..3.0,
        sigma in 0.05f64..2.0,
    ) {
        let scale = AxisScale::new(s, s, s);
        let (near, far) = if query.distance_sq(&a) <= query.distance_sq(&b) {
            (a, b)
        } else {
            (b, a)
        };
        let whitened_near = SimilarityModel::GaussWhitened.percent(&query, &near, 1.0, sigma, &scale);
        let whitened_far = SimilarityModel::GaussWhitened.percent(&query, &far, 1.0, sigma, &scale);
        prop_assert!(whitened_near >= whitened_far);

        let plain_near = SimilarityModel::Gauss.percent(&query, &near, 1.0, sigma, &scale);
        let plain_far = SimilarityModel::Gauss.percent(&query, &far, 1.0, sigma, &scale);
        prop_assert!(plain_near >= plain_far);
    }
}
