//! Property-based tests for triangle-time
//!
//! - Test mathematical invariants of the model
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use triangle_time::model::{entropy, normalize, predict, proportions_from_durations, MAX_ENTROPY};
use triangle_time::training::fit;
use triangle_time::{ModelParameters, Proportions, TaskRecord};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Non-negative durations with a positive sum
fn arb_durations() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0)
        .prop_filter("positive sum", |(a, b, c)| a + b + c > 1e-6)
}

/// A point on the simplex
fn arb_proportions() -> impl Strategy<Value = Proportions> {
    arb_durations().prop_map(|(a, b, c)| proportions_from_durations(a, b, c))
}

/// Base-model parameters
fn arb_linear_params() -> impl Strategy<Value = ModelParameters> {
    (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0)
        .prop_map(|(a, b, c)| ModelParameters::linear(a, b, c))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: proportions sum to one for any positive-sum durations
    #[test]
    fn prop_proportions_sum_to_one((a, b, c) in arb_durations()) {
        let p = proportions_from_durations(a, b, c);
        prop_assert!((p.sum() - 1.0).abs() < 1e-9);
        prop_assert!(p.a() >= 0.0 && p.b() >= 0.0 && p.c() >= 0.0);
    }

    /// Property: entropy stays within [0, ln 3]
    #[test]
    fn prop_entropy_in_range(p in arb_proportions()) {
        let h = entropy(p);
        prop_assert!(h >= 0.0);
        prop_assert!(h <= MAX_ENTROPY + 1e-12);
    }

    /// Property: base prediction is affine in the proportion triple
    #[test]
    fn prop_linear_prediction_is_affine(
        p in arb_proportions(),
        q in arb_proportions(),
        w in 0.0f64..=1.0,
        params in arb_linear_params()
    ) {
        let mixed = Proportions::new(
            w * p.a() + (1.0 - w) * q.a(),
            w * p.b() + (1.0 - w) * q.b(),
            w * p.c() + (1.0 - w) * q.c(),
        );
        let lhs = predict(mixed, &params);
        let rhs = w * predict(p, &params) + (1.0 - w) * predict(q, &params);
        prop_assert!((lhs - rhs).abs() < 1e-9 * (1.0 + lhs.abs()));
    }

    /// Property: normalization is idempotent and keeps durations
    #[test]
    fn prop_normalize_idempotent((a, b, c) in arb_durations()) {
        let task = TaskRecord::new(a, b, c);
        let once = normalize(&task);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(once.duration_a(), a);
        prop_assert_eq!(once.total(), Some(a + b + c));
    }

    /// Property: a fit on noiseless base-model data recovers the vertex values
    #[test]
    fn prop_fit_recovers_linear_model(
        params in arb_linear_params(),
        mixed in proptest::collection::vec(arb_durations(), 1..10)
    ) {
        // Shift targets so every ground truth is positive.
        let shifted = ModelParameters::linear(
            params.vertex_value_a() + 200.0,
            params.vertex_value_b() + 200.0,
            params.vertex_value_c() + 200.0,
        );
        let mut durations = vec![(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)];
        durations.extend(mixed);

        let history: Vec<TaskRecord> = durations
            .into_iter()
            .map(|(a, b, c)| {
                let total = predict(proportions_from_durations(a, b, c), &shifted);
                TaskRecord::builder(a, b, c).total(total).build()
            })
            .collect();

        let fitted = fit(&history, false).unwrap();
        for (got, want) in fitted.vertex_values().iter().zip(shifted.vertex_values()) {
            prop_assert!((got - want).abs() < 1e-6, "got {}, want {}", got, want);
        }
    }
}
