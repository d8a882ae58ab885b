//! Barycentric mixture model
//!
//! Pure math, no I/O:
//! - Conversion of category durations into proportions ([`proportions_from_durations`], [`normalize`])
//! - Mixing entropy of a proportion triple ([`entropy`])
//! - Time prediction from proportions and fitted parameters ([`predict`], [`predict_for_task`])
//!
//! ## Model
//!
//! ```text
//! T(p) = p_a * V_a + p_b * V_b + p_c * V_c  [+ eta * H(p)]
//! H(p) = -Σ p_i ln p_i,   0 <= H <= ln 3
//! ```
//!
//! ## Example
//!
//! ```rust
//! use triangle_time::model::predict_for_task;
//! use triangle_time::schema::{ModelParameters, TaskRecord};
//!
//! let task = TaskRecord::new(2.0, 3.0, 1.0);
//! let params = ModelParameters::linear(10.0, 5.0, 2.0);
//!
//! let estimate = predict_for_task(&task, &params);
//! assert!((estimate - 6.1667).abs() < 1e-4);
//! ```

mod entropy;
mod predictor;
mod proportions;

pub use entropy::{entropy, MAX_ENTROPY};
pub use predictor::{predict, predict_for_task};
pub use proportions::{normalize, proportions_from_durations};
pub(crate) use proportions::resolved_proportions;
