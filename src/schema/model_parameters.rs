//! Model Parameters - the fitted barycentric mixture model

use serde::{Deserialize, Serialize};

/// Model Parameters of the triangle time model.
///
/// `vertex_value_*` is the expected total time of a "pure" task located at
/// that category's vertex (proportion 1 there, 0 elsewhere). The
/// `entropy_coefficient` scales the mixing-entropy term and is ignored
/// unless `use_entropy` is set.
///
/// Produced once per fit and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(alias = "T_gov_star")]
    vertex_value_a: f64,
    #[serde(alias = "T_azure_star")]
    vertex_value_b: f64,
    #[serde(alias = "T_ds_star")]
    vertex_value_c: f64,
    #[serde(default, alias = "eta")]
    entropy_coefficient: f64,
    #[serde(default)]
    use_entropy: bool,
}

impl ModelParameters {
    /// Create a parameter set.
    #[must_use]
    pub const fn new(
        vertex_value_a: f64,
        vertex_value_b: f64,
        vertex_value_c: f64,
        entropy_coefficient: f64,
        use_entropy: bool,
    ) -> Self {
        Self {
            vertex_value_a,
            vertex_value_b,
            vertex_value_c,
            entropy_coefficient,
            use_entropy,
        }
    }

    /// Create a base (entropy-free) parameter set.
    #[must_use]
    pub const fn linear(vertex_value_a: f64, vertex_value_b: f64, vertex_value_c: f64) -> Self {
        Self::new(vertex_value_a, vertex_value_b, vertex_value_c, 0.0, false)
    }

    /// Create a parameter set that includes the mixing-entropy term.
    #[must_use]
    pub const fn with_entropy(
        vertex_value_a: f64,
        vertex_value_b: f64,
        vertex_value_c: f64,
        entropy_coefficient: f64,
    ) -> Self {
        Self::new(
            vertex_value_a,
            vertex_value_b,
            vertex_value_c,
            entropy_coefficient,
            true,
        )
    }

    /// Expected time of a pure governance task.
    #[must_use]
    pub const fn vertex_value_a(&self) -> f64 {
        self.vertex_value_a
    }

    /// Expected time of a pure platform task.
    #[must_use]
    pub const fn vertex_value_b(&self) -> f64 {
        self.vertex_value_b
    }

    /// Expected time of a pure data-science task.
    #[must_use]
    pub const fn vertex_value_c(&self) -> f64 {
        self.vertex_value_c
    }

    /// Vertex values in category order.
    #[must_use]
    pub const fn vertex_values(&self) -> [f64; 3] {
        [self.vertex_value_a, self.vertex_value_b, self.vertex_value_c]
    }

    /// Multiplier on the mixing-entropy term.
    #[must_use]
    pub const fn entropy_coefficient(&self) -> f64 {
        self.entropy_coefficient
    }

    /// Whether the entropy term participates in predictions.
    #[must_use]
    pub const fn use_entropy(&self) -> bool {
        self.use_entropy
    }
}
