//! Design matrix construction

use nalgebra::{DMatrix, DVector};

use super::ground_truth;
use crate::model::{entropy, resolved_proportions};
use crate::schema::TaskRecord;
use crate::{Error, Result};

/// Least-squares system `X β ≈ y` built from historical tasks.
///
/// Columns are `p_a, p_b, p_c` and, for the entropy variant, `H(p)`.
#[derive(Debug)]
pub(crate) struct DesignMatrix {
    pub(crate) x: DMatrix<f64>,
    pub(crate) y: DVector<f64>,
    pub(crate) dropped: usize,
}

impl DesignMatrix {
    pub(crate) const fn columns(use_entropy: bool) -> usize {
        if use_entropy {
            4
        } else {
            3
        }
    }

    /// Build the system, skipping degenerate records.
    ///
    /// # Errors
    ///
    /// - `EmptyTrainingSet` if no record has a positive target
    /// - `MalformedInput` if a surviving record produces a non-finite value
    pub(crate) fn build(records: &[TaskRecord], use_entropy: bool) -> Result<Self> {
        let columns = Self::columns(use_entropy);
        let mut values = Vec::with_capacity(records.len() * columns);
        let mut targets = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(target) = ground_truth(record) else {
                tracing::debug!(index, id = record.id().unwrap_or(""), "skipping degenerate task");
                continue;
            };

            let proportions = resolved_proportions(record);

            let mut row = proportions.to_array().to_vec();
            if use_entropy {
                row.push(entropy(proportions));
            }

            if !target.is_finite() || row.iter().any(|v| !v.is_finite()) {
                return Err(Error::MalformedInput(format!(
                    "task {} (index {index}) has non-finite durations, total or proportions",
                    record.id().unwrap_or("<unnamed>")
                )));
            }

            values.extend(row);
            targets.push(target);
        }

        if targets.is_empty() {
            return Err(Error::EmptyTrainingSet {
                total: records.len(),
            });
        }

        let rows = targets.len();
        Ok(Self {
            x: DMatrix::from_row_slice(rows, columns, &values),
            y: DVector::from_vec(targets),
            dropped: records.len() - rows,
        })
    }
}
