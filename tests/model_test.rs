//! Proportion, entropy and prediction behavior through the public API

use triangle_time::model::{
    entropy, normalize, predict, predict_for_task, proportions_from_durations, MAX_ENTROPY,
};
use triangle_time::{ModelParameters, Proportions, TaskRecord};

// =============================================================================
// Proportions
// =============================================================================

#[test]
fn test_zero_durations_are_degenerate_not_an_error() {
    let p = proportions_from_durations(0.0, 0.0, 0.0);
    assert_eq!(p, Proportions::ZERO);
}

#[test]
fn test_normalize_scenario() {
    let task = TaskRecord::new(2.0, 3.0, 1.0);
    let normalized = normalize(&task);

    assert_eq!(normalized.total(), Some(6.0));
    let p = normalized.proportions().expect("proportions derived");
    assert!((p.a() - 0.3333).abs() < 1e-4);
    assert!((p.b() - 0.5).abs() < 1e-12);
    assert!((p.c() - 0.1667).abs() < 1e-4);
}

#[test]
fn test_normalize_zero_task() {
    let normalized = normalize(&TaskRecord::new(0.0, 0.0, 0.0));
    assert_eq!(normalized.total(), Some(0.0));
    assert_eq!(normalized.proportions(), Some(Proportions::ZERO));
}

#[test]
fn test_supplied_total_kept_even_if_inconsistent() {
    let task = TaskRecord::builder(1.0, 1.0, 1.0).total(10.0).build();
    assert_eq!(normalize(&task).total(), Some(10.0));
}

// =============================================================================
// Entropy
// =============================================================================

#[test]
fn test_entropy_bounds() {
    assert_eq!(entropy(Proportions::new(1.0, 0.0, 0.0)), 0.0);
    let third = 1.0 / 3.0;
    assert!((entropy(Proportions::new(third, third, third)) - MAX_ENTROPY).abs() < 1e-12);
}

#[test]
fn test_entropy_ignores_negative_coordinates() {
    let h = entropy(Proportions::new(-0.5, 1.5, 0.0));
    assert!((h - (-1.5 * 1.5_f64.ln())).abs() < 1e-12);
}

// =============================================================================
// Prediction
// =============================================================================

#[test]
fn test_predict_for_task_scenario() {
    let task = TaskRecord::new(2.0, 3.0, 1.0);
    let params = ModelParameters::new(10.0, 5.0, 2.0, 0.0, false);

    let estimate = predict_for_task(&task, &params);
    assert!((estimate - 6.1667).abs() < 1e-4);
    assert!((estimate - 37.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_predict_for_task_does_not_mutate_input() {
    let task = TaskRecord::new(2.0, 3.0, 1.0);
    let before = task.clone();
    let _ = predict_for_task(&task, &ModelParameters::linear(1.0, 1.0, 1.0));
    assert_eq!(task, before);
}

#[test]
fn test_supplied_proportions_override_durations() {
    let task = TaskRecord::builder(100.0, 0.0, 0.0)
        .proportions(Proportions::new(0.0, 0.0, 1.0))
        .build();
    let params = ModelParameters::linear(1.0, 2.0, 3.0);
    assert_eq!(predict_for_task(&task, &params), 3.0);
}

#[test]
fn test_partial_proportions_from_json_are_recomputed() {
    let task: TaskRecord =
        serde_json::from_str(r#"{"duration_a": 1.0, "duration_b": 1.0, "proportion_c": 1.0}"#)
            .unwrap();
    let params = ModelParameters::linear(2.0, 4.0, 100.0);

    // Derived from durations (0.5, 0.5, 0), not from the lone proportion_c.
    assert!((predict_for_task(&task, &params) - 3.0).abs() < 1e-12);
}

#[test]
fn test_predict_with_entropy_on_mixed_task() {
    let params = ModelParameters::with_entropy(2.0, 2.0, 2.0, 10.0);
    let p = Proportions::new(0.5, 0.5, 0.0);
    let expected = 2.0 + 10.0 * 2.0_f64.ln();
    assert!((predict(p, &params) - expected).abs() < 1e-12);
}
