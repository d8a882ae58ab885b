//! Error types for triangle-time
//!
//! Degenerate records (non-positive ground truth) are not errors: they are
//! filtered out by the trainer and evaluator and only show up in logs.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Triangle-time error types
#[derive(Error, Debug)]
pub enum Error {
    /// No record survived degeneracy filtering during a fit
    #[error("Empty training set: none of the {total} records has a positive total time\nLog durations or a total for at least one task before fitting")]
    EmptyTrainingSet {
        /// Number of records inspected
        total: usize,
    },

    /// No record survived degeneracy filtering during an evaluation
    #[error("Empty evaluation set: none of the {total} records has a positive total time")]
    EmptyEvaluationSet {
        /// Number of records inspected
        total: usize,
    },

    /// Solved coefficient vector has the wrong length (internal invariant)
    #[error("Coefficient shape mismatch: expected {expected} coefficients, solver returned {actual}. Please report this issue.")]
    ShapeMismatch {
        /// Coefficients required by the model variant (3 or 4)
        expected: usize,
        /// Coefficients produced by the solver
        actual: usize,
    },

    /// Least-squares factorization failed
    #[error("Least-squares solver failed: {0}")]
    SolverFailed(String),

    /// External input could not be decoded into task records or parameters
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Required input file does not exist
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow error (CSV decoding, batch construction)
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
