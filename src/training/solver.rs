//! SVD least squares
//!
//! Singular values at or below `eps * max(rows, cols) * s_max` are treated
//! as zero, which yields the minimum-norm solution when the design matrix
//! is rank deficient (e.g. the entropy column is constant).

use nalgebra::{DMatrix, DVector, SVD};

use crate::{Error, Result};

/// Iteration cap for the SVD; non-convergence surfaces as `SolverFailed`.
const MAX_SVD_ITERATIONS: usize = 10_000;

/// Solution of `min ‖X β − y‖₂`.
#[derive(Debug)]
pub(crate) struct LeastSquares {
    pub(crate) coefficients: DVector<f64>,
    pub(crate) rank: usize,
    pub(crate) residual_sum_of_squares: f64,
}

pub(crate) fn solve(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<LeastSquares> {
    let (rows, cols) = x.shape();
    let svd = SVD::try_new(x.clone(), true, true, f64::EPSILON, MAX_SVD_ITERATIONS)
        .ok_or_else(|| Error::SolverFailed("SVD did not converge".to_string()))?;

    #[allow(clippy::cast_precision_loss)]
    let cutoff = f64::EPSILON * rows.max(cols) as f64 * svd.singular_values.max();
    let rank = svd.singular_values.iter().filter(|&&s| s > cutoff).count();

    let coefficients = svd
        .solve(y, cutoff)
        .map_err(|e| Error::SolverFailed(e.to_string()))?;
    let residual_sum_of_squares = (x * &coefficients - y).norm_squared();

    Ok(LeastSquares {
        coefficients,
        rank,
        residual_sum_of_squares,
    })
}
