//! Duration to proportion conversion

use crate::schema::{Proportions, TaskRecord};

/// Convert raw category durations into barycentric proportions.
///
/// Tasks with no logged time (`a + b + c <= 0`) map to the all-zero triple
/// instead of dividing by zero.
#[must_use]
pub fn proportions_from_durations(a: f64, b: f64, c: f64) -> Proportions {
    let sum = a + b + c;
    if sum <= 0.0 {
        return Proportions::ZERO;
    }
    Proportions::new(a / sum, b / sum, c / sum)
}

/// Return a copy of `task` with `total` and the proportion triple filled in.
///
/// - A missing `total` becomes the sum of the durations.
/// - A missing triple is derived from the durations; a present triple is
///   kept as supplied.
///
/// Idempotent: normalizing a normalized record returns an equal record.
#[must_use]
pub fn normalize(task: &TaskRecord) -> TaskRecord {
    let total = task.total().unwrap_or_else(|| task.duration_sum());
    task.clone().with_derived(total, resolved_proportions(task))
}

/// The supplied triple, or the one derived from the durations.
pub(crate) fn resolved_proportions(task: &TaskRecord) -> Proportions {
    task.proportions().unwrap_or_else(|| {
        proportions_from_durations(task.duration_a(), task.duration_b(), task.duration_c())
    })
}
