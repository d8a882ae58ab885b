//! Trainer and evaluator scenarios

use triangle_time::training::{evaluate, fit, ground_truth, EvaluationReport, Trainer};
use triangle_time::{Config, Error, ModelParameters, Proportions, TaskRecord};

/// Tasks whose recorded total is exactly `2 p_a + 4 p_b + 6 p_c`.
fn linear_history() -> Vec<TaskRecord> {
    [
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 1.0, 0.0),
        (1.0, 2.0, 3.0),
        (5.0, 1.0, 1.0),
    ]
    .iter()
    .map(|&(a, b, c)| {
        let sum: f64 = a + b + c;
        let total = 2.0 * a / sum + 4.0 * b / sum + 6.0 * c / sum;
        TaskRecord::builder(a, b, c).total(total).build()
    })
    .collect()
}

// =============================================================================
// Trainer
// =============================================================================

#[test]
fn test_fit_recovers_vertex_values() {
    let params = fit(&linear_history(), false).unwrap();

    assert!((params.vertex_value_a() - 2.0).abs() < 1e-6);
    assert!((params.vertex_value_b() - 4.0).abs() < 1e-6);
    assert!((params.vertex_value_c() - 6.0).abs() < 1e-6);
    assert_eq!(params.entropy_coefficient(), 0.0);
    assert!(!params.use_entropy());
}

#[test]
fn test_fit_recovers_entropy_coefficient() {
    let truth = ModelParameters::with_entropy(3.0, 5.0, 8.0, 2.5);
    let history: Vec<TaskRecord> = [
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (2.0, 1.0, 0.0),
        (0.0, 3.0, 1.0),
    ]
    .iter()
    .map(|&(a, b, c)| {
        let task = TaskRecord::new(a, b, c);
        let total = triangle_time::model::predict_for_task(&task, &truth);
        TaskRecord::builder(a, b, c).total(total).build()
    })
    .collect();

    let params = fit(&history, true).unwrap();
    assert!(params.use_entropy());
    assert!((params.vertex_value_a() - 3.0).abs() < 1e-6);
    assert!((params.vertex_value_b() - 5.0).abs() < 1e-6);
    assert!((params.vertex_value_c() - 8.0).abs() < 1e-6);
    assert!((params.entropy_coefficient() - 2.5).abs() < 1e-6);
}

#[test]
fn test_fit_empty_is_fatal() {
    let err = fit(&[], true).unwrap_err();
    assert!(matches!(err, Error::EmptyTrainingSet { total: 0 }));
}

#[test]
fn test_fit_all_degenerate_is_fatal() {
    let records = vec![
        TaskRecord::new(0.0, 0.0, 0.0),
        TaskRecord::builder(0.0, 0.0, 0.0).total(-1.0).build(),
    ];
    let err = fit(&records, false).unwrap_err();
    assert!(matches!(err, Error::EmptyTrainingSet { total: 2 }));
}

#[test]
fn test_degenerate_records_do_not_change_fit() {
    let clean = fit(&linear_history(), false).unwrap();

    let mut noisy = linear_history();
    noisy.push(TaskRecord::new(0.0, 0.0, 0.0));
    noisy.push(TaskRecord::builder(0.0, 0.0, 0.0).total(0.0).build());
    let with_degenerate = fit(&noisy, false).unwrap();

    assert!((clean.vertex_value_a() - with_degenerate.vertex_value_a()).abs() < 1e-12);
    assert!((clean.vertex_value_b() - with_degenerate.vertex_value_b()).abs() < 1e-12);
    assert!((clean.vertex_value_c() - with_degenerate.vertex_value_c()).abs() < 1e-12);
}

#[test]
fn test_rank_deficient_fit_is_minimum_norm() {
    // Every task sits at the centroid: only V_a + V_b + V_c is identified.
    let third = 1.0 / 3.0;
    let centroid = Proportions::new(third, third, third);
    let records = vec![
        TaskRecord::builder(0.0, 0.0, 0.0).total(3.0).proportions(centroid).build(),
        TaskRecord::builder(0.0, 0.0, 0.0).total(3.0).proportions(centroid).build(),
    ];

    let (params, summary) = Trainer::new(false).fit_with_summary(&records).unwrap();
    assert_eq!(summary.rank, 1);
    assert!(summary.is_rank_deficient());
    for value in params.vertex_values() {
        assert!((value - 3.0).abs() < 1e-9, "expected 3.0, got {value}");
    }
}

#[test]
fn test_trainer_from_config() {
    let config = Config::default().with_use_entropy(false);
    let trainer = Trainer::from_config(&config);
    assert!(!trainer.use_entropy());
    assert!(!trainer.fit(&linear_history()).unwrap().use_entropy());
}

#[test]
fn test_total_falls_back_to_duration_sum() {
    // No totals recorded: targets are duration sums.
    let records = vec![
        TaskRecord::new(3.0, 0.0, 0.0),
        TaskRecord::new(0.0, 5.0, 0.0),
        TaskRecord::new(0.0, 0.0, 7.0),
    ];
    let params = fit(&records, false).unwrap();
    assert!((params.vertex_value_a() - 3.0).abs() < 1e-9);
    assert!((params.vertex_value_b() - 5.0).abs() < 1e-9);
    assert!((params.vertex_value_c() - 7.0).abs() < 1e-9);
}

// =============================================================================
// Evaluator
// =============================================================================

#[test]
fn test_evaluate_perfect_model() {
    let history = linear_history();
    let params = ModelParameters::linear(2.0, 4.0, 6.0);
    let report = evaluate(&history, &params).unwrap();

    assert_eq!(report.n(), history.len());
    assert_eq!(report.mape_count(), history.len());
    assert!(report.mae() < 1e-12);
    assert!(report.rmse() < 1e-12);
    assert!(report.mape() < 1e-12);
}

#[test]
fn test_evaluate_skips_degenerate_records() {
    let records = vec![
        TaskRecord::new(0.0, 0.0, 0.0),
        TaskRecord::new(2.0, 0.0, 0.0),
        TaskRecord::new(0.0, 4.0, 0.0),
    ];
    let params = ModelParameters::linear(1.0, 1.0, 1.0);
    let report = evaluate(&records, &params).unwrap();

    assert_eq!(report.n(), 2);
    assert!((report.mae() - (1.0 + 3.0) / 2.0).abs() < 1e-12);
    assert!((report.mse() - (1.0 + 9.0) / 2.0).abs() < 1e-12);
    assert!((report.rmse() - 5.0_f64.sqrt()).abs() < 1e-12);
    assert!((report.mape() - (0.5 + 0.75) / 2.0).abs() < 1e-12);
}

#[test]
fn test_metric_asymmetry_with_zero_truth() {
    // One zero ground truth, two non-zero: mae/rmse over 3, mape over 2.
    let report = EvaluationReport::from_pairs(&[(0.0, 0.5), (1.0, 1.5), (2.0, 1.0)]).unwrap();

    assert_eq!(report.n(), 3);
    assert_eq!(report.mape_count(), 2);
    assert!((report.mae() - (0.5 + 0.5 + 1.0) / 3.0).abs() < 1e-12);
    assert!((report.rmse() - ((0.25 + 0.25 + 1.0) / 3.0_f64).sqrt()).abs() < 1e-12);
    assert!((report.mape() - (0.5 + 0.5) / 2.0).abs() < 1e-12);
}

#[test]
fn test_evaluate_empty_is_fatal() {
    let err = evaluate(&[], &ModelParameters::linear(1.0, 1.0, 1.0)).unwrap_err();
    assert!(matches!(err, Error::EmptyEvaluationSet { total: 0 }));
}

#[test]
fn test_ground_truth_shared_rule() {
    assert_eq!(ground_truth(&TaskRecord::builder(1.0, 0.0, 0.0).total(0.0).build()), Some(1.0));
    assert_eq!(ground_truth(&TaskRecord::builder(0.0, 0.0, 0.0).total(2.0).build()), Some(2.0));
    assert_eq!(ground_truth(&TaskRecord::new(0.0, 0.0, 0.0)), None);
}

#[test]
fn test_report_serializes_metric_names() {
    let report = EvaluationReport::from_pairs(&[(1.0, 2.0)]).unwrap();
    let value = serde_json::to_value(report).unwrap();
    for key in ["n", "mape_count", "mae", "mse", "rmse", "mape"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
