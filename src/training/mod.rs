//! Model fitting and evaluation
//!
//! Responsibilities:
//! - Fit [`ModelParameters`](crate::schema::ModelParameters) from historical
//!   tasks by ordinary least squares ([`Trainer`], [`fit`])
//! - Measure a fitted model against a dataset ([`evaluate`])
//!
//! ## Ground Truth
//!
//! Both halves share one rule for a record's target value: the recorded
//! `total` when it is positive, otherwise the sum of the category
//! durations. Records whose target is still non-positive are degenerate and
//! are skipped (logged at `debug`, never reported as failures).
//!
//! ## Example
//!
//! ```rust
//! use triangle_time::schema::TaskRecord;
//! use triangle_time::training::{evaluate, fit};
//!
//! let tasks = vec![
//!     TaskRecord::new(4.0, 0.0, 0.0),
//!     TaskRecord::new(0.0, 6.0, 0.0),
//!     TaskRecord::new(0.0, 0.0, 9.0),
//!     TaskRecord::new(2.0, 3.0, 1.0),
//! ];
//!
//! let params = fit(&tasks, false)?;
//! let report = evaluate(&tasks, &params)?;
//! assert_eq!(report.n(), 4);
//! # Ok::<(), triangle_time::Error>(())
//! ```

mod design;
mod evaluator;
mod solver;
mod trainer;

pub use evaluator::{evaluate, EvaluationReport};
pub use trainer::{fit, FitSummary, Trainer};

use crate::schema::TaskRecord;

/// Target value of a record, or `None` if the record is degenerate.
#[must_use]
pub fn ground_truth(record: &TaskRecord) -> Option<f64> {
    let target = match record.total() {
        Some(total) if total > 0.0 => total,
        _ => record.duration_sum(),
    };
    (target > 0.0).then_some(target)
}
