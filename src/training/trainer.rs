//! Least-squares trainer

use serde::{Deserialize, Serialize};

use super::design::DesignMatrix;
use super::solver;
use crate::config::Config;
use crate::schema::{ModelParameters, TaskRecord};
use crate::{Error, Result};

/// Diagnostics of a single fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    /// Records that contributed a row to the design matrix
    pub records_used: usize,
    /// Degenerate records skipped
    pub records_dropped: usize,
    /// Numerical rank of the design matrix
    pub rank: usize,
    /// Columns in the design matrix (3, or 4 with entropy)
    pub columns: usize,
    /// `‖X β − y‖²` at the solution
    pub residual_sum_of_squares: f64,
}

impl FitSummary {
    /// Whether the minimum-norm tie-break decided some coefficients.
    #[must_use]
    pub const fn is_rank_deficient(&self) -> bool {
        self.rank < self.columns
    }
}

/// Fits [`ModelParameters`] by ordinary least squares:
///
/// ```text
/// T_k ≈ p_ak * V_a + p_bk * V_b + p_ck * V_c [+ eta * H(p_k)]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trainer {
    use_entropy: bool,
}

impl Trainer {
    /// Create a trainer for the requested model variant.
    #[must_use]
    pub const fn new(use_entropy: bool) -> Self {
        Self { use_entropy }
    }

    /// Create a trainer using the configured model variant.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.use_entropy())
    }

    /// Whether the entropy column is fitted.
    #[must_use]
    pub const fn use_entropy(&self) -> bool {
        self.use_entropy
    }

    /// Fit parameters from historical tasks.
    ///
    /// # Errors
    ///
    /// See [`Trainer::fit_with_summary`].
    pub fn fit(&self, records: &[TaskRecord]) -> Result<ModelParameters> {
        self.fit_with_summary(records).map(|(params, _)| params)
    }

    /// Fit parameters and report fit diagnostics.
    ///
    /// # Errors
    ///
    /// - `EmptyTrainingSet` if every record is degenerate
    /// - `MalformedInput` if a record carries non-finite values
    /// - `SolverFailed` if the SVD does not converge
    /// - `ShapeMismatch` if the solver returns the wrong number of coefficients
    pub fn fit_with_summary(
        &self,
        records: &[TaskRecord],
    ) -> Result<(ModelParameters, FitSummary)> {
        let design = DesignMatrix::build(records, self.use_entropy)?;
        let columns = DesignMatrix::columns(self.use_entropy);
        let solution = solver::solve(&design.x, &design.y)?;

        let beta = solution.coefficients.as_slice();
        let params = match (self.use_entropy, beta) {
            (true, &[a, b, c, eta]) => ModelParameters::with_entropy(a, b, c, eta),
            (false, &[a, b, c]) => ModelParameters::linear(a, b, c),
            _ => {
                return Err(Error::ShapeMismatch {
                    expected: columns,
                    actual: beta.len(),
                })
            }
        };

        let summary = FitSummary {
            records_used: design.y.len(),
            records_dropped: design.dropped,
            rank: solution.rank,
            columns,
            residual_sum_of_squares: solution.residual_sum_of_squares,
        };

        if summary.is_rank_deficient() {
            tracing::warn!(
                rank = summary.rank,
                columns,
                "design matrix is rank deficient, using minimum-norm coefficients"
            );
        }
        tracing::info!(
            used = summary.records_used,
            dropped = summary.records_dropped,
            use_entropy = self.use_entropy,
            rss = summary.residual_sum_of_squares,
            "fitted triangle model"
        );

        Ok((params, summary))
    }
}

/// Fit parameters from historical tasks.
///
/// Shorthand for `Trainer::new(use_entropy).fit(records)`.
///
/// # Errors
///
/// See [`Trainer::fit_with_summary`].
pub fn fit(records: &[TaskRecord], use_entropy: bool) -> Result<ModelParameters> {
    Trainer::new(use_entropy).fit(records)
}
