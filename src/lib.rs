//! # Triangle-Time: Effort Estimation over Three Work Categories
//!
//! **Version**: 0.1.0
//!
//! Triangle-time estimates the total effort of a task whose time is split
//! across three categories (governance, platform, data science). Each task
//! sits inside a triangle at the barycentric coordinates given by its
//! duration proportions; the model learns one expected time per vertex and,
//! optionally, a penalty for mixing categories.
//!
//! ## Model
//!
//! ```text
//! T(p) = p_a * V_a + p_b * V_b + p_c * V_c  [+ eta * H(p)]
//! ```
//!
//! `V_*` and `eta` are fitted by SVD least squares over historical tasks
//! (minimum-norm for rank-deficient data).
//!
//! ## Example Usage
//!
//! ```rust
//! use triangle_time::model::predict_for_task;
//! use triangle_time::schema::TaskRecord;
//! use triangle_time::training::{evaluate, fit};
//!
//! let history = vec![
//!     TaskRecord::new(2.0, 0.0, 0.0),
//!     TaskRecord::new(0.0, 4.0, 0.0),
//!     TaskRecord::new(0.0, 0.0, 6.0),
//!     TaskRecord::builder(1.0, 1.0, 0.0).total(3.0).build(),
//! ];
//!
//! let params = fit(&history, false)?;
//! let estimate = predict_for_task(&TaskRecord::new(1.0, 1.0, 2.0), &params);
//! assert!((estimate - 4.5).abs() < 1e-6);
//!
//! let report = evaluate(&history, &params)?;
//! assert_eq!(report.n(), 4);
//! # Ok::<(), triangle_time::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod server;
pub mod storage;
pub mod training;

pub use config::Config;
pub use error::{Error, Result};
pub use schema::{ModelParameters, Proportions, TaskRecord};
