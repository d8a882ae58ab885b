//! Aggregate error metrics of a fitted model

use serde::{Deserialize, Serialize};

use super::ground_truth;
use crate::model::predict_for_task;
use crate::schema::{ModelParameters, TaskRecord};
use crate::{Error, Result};

/// Error metrics of a model over a dataset.
///
/// `mae`, `mse` and `rmse` average over all `n` pairs. `mape` averages
/// only over the `mape_count` pairs whose truth is non-zero and whose
/// relative error is finite, so `mape_count <= n`. An empty `mape` subset
/// reports `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    n: usize,
    mape_count: usize,
    mae: f64,
    mse: f64,
    rmse: f64,
    mape: f64,
}

impl EvaluationReport {
    /// Compute metrics from `(truth, prediction)` pairs.
    ///
    /// No filtering is applied to the pairs. Returns `None` for an empty
    /// slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }

        let mut abs_sum = 0.0;
        let mut sq_sum = 0.0;
        let mut pct_sum = 0.0;
        let mut mape_count = 0_usize;

        for &(truth, prediction) in pairs {
            let abs_error = (prediction - truth).abs();
            abs_sum += abs_error;
            sq_sum += abs_error * abs_error;

            let pct = abs_error / truth;
            if truth != 0.0 && pct.is_finite() {
                pct_sum += pct;
                mape_count += 1;
            }
        }

        let n = pairs.len();
        let mse = sq_sum / n as f64;
        Some(Self {
            n,
            mape_count,
            mae: abs_sum / n as f64,
            mse,
            rmse: mse.sqrt(),
            mape: if mape_count == 0 {
                0.0
            } else {
                pct_sum / mape_count as f64
            },
        })
    }

    /// Number of records evaluated.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Number of records contributing to `mape`.
    #[must_use]
    pub const fn mape_count(&self) -> usize {
        self.mape_count
    }

    /// Mean absolute error.
    #[must_use]
    pub const fn mae(&self) -> f64 {
        self.mae
    }

    /// Mean squared error.
    #[must_use]
    pub const fn mse(&self) -> f64 {
        self.mse
    }

    /// Root mean squared error.
    #[must_use]
    pub const fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Mean absolute percentage error, as a fraction (0.1 = 10%).
    #[must_use]
    pub const fn mape(&self) -> f64 {
        self.mape
    }
}

/// Evaluate `params` on a dataset of tasks.
///
/// Degenerate records are skipped exactly as during training.
///
/// # Errors
///
/// Returns `EmptyEvaluationSet` if every record is degenerate.
pub fn evaluate(records: &[TaskRecord], params: &ModelParameters) -> Result<EvaluationReport> {
    let pairs: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|record| {
            ground_truth(record).map(|truth| (truth, predict_for_task(record, params)))
        })
        .collect();

    let report = EvaluationReport::from_pairs(&pairs).ok_or(Error::EmptyEvaluationSet {
        total: records.len(),
    })?;

    tracing::info!(
        n = report.n,
        skipped = records.len() - report.n,
        mae = report.mae,
        rmse = report.rmse,
        mape = report.mape,
        "evaluated triangle model"
    );
    Ok(report)
}
