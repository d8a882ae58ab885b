//! Time prediction

use super::{entropy, resolved_proportions};
use crate::schema::{ModelParameters, Proportions, TaskRecord};

/// Predict total time from a proportion triple.
///
/// ```text
/// T = p_a * V_a + p_b * V_b + p_c * V_c            (base model)
/// T += entropy_coefficient * H(p)                  (if use_entropy)
/// ```
#[must_use]
pub fn predict(proportions: Proportions, params: &ModelParameters) -> f64 {
    let base = proportions
        .to_array()
        .iter()
        .zip(params.vertex_values())
        .map(|(p, vertex)| p * vertex)
        .sum::<f64>();

    if params.use_entropy() {
        base + params.entropy_coefficient() * entropy(proportions)
    } else {
        base
    }
}

/// Predict total time for a task record.
///
/// Uses the task's own proportion triple if it has one, otherwise the triple
/// derived from its durations, exactly as [`normalize`](super::normalize)
/// would. Tasks without any logged time sit at [`Proportions::ZERO`] and
/// predict `0.0` under either model variant.
#[must_use]
pub fn predict_for_task(task: &TaskRecord, params: &ModelParameters) -> f64 {
    predict(resolved_proportions(task), params)
}
