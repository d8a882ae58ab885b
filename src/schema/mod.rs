//! Boundary records of the estimation core
//!
//! ## Schema Overview
//!
//! ```text
//! TaskRecord ──normalize──> TaskRecord (total + Proportions filled)
//!      │                           │
//!      └──── Trainer ──> ModelParameters ──> Predictor
//! ```
//!
//! Both records serialize to the flat field set exchanged with storage and
//! the command surface: `id, duration_a, duration_b, duration_c, total,
//! proportion_a, proportion_b, proportion_c` for tasks and
//! `vertex_value_a, vertex_value_b, vertex_value_c, entropy_coefficient,
//! use_entropy` for parameters.
//!
//! ## Usage
//!
//! ```rust
//! use triangle_time::schema::{ModelParameters, Proportions, TaskRecord};
//!
//! let task = TaskRecord::builder(2.0, 3.0, 1.0).id("TASK-123").build();
//! assert!(task.proportions().is_none());
//!
//! let given = TaskRecord::builder(0.0, 0.0, 0.0)
//!     .proportions(Proportions::new(0.5, 0.3, 0.2))
//!     .build();
//! assert!(given.proportions().is_some());
//!
//! let params = ModelParameters::linear(10.0, 5.0, 2.0);
//! assert!(!params.use_entropy());
//! ```

mod model_parameters;
mod task_record;

pub use model_parameters::ModelParameters;
pub use task_record::{Proportions, TaskRecord, TaskRecordBuilder};
pub(crate) use task_record::TaskRecordWire;
