//! Persistence of task records and model parameters
//!
//! - Task tables: CSV (`arrow::csv`) or Parquet, chosen by file extension
//! - Model parameters: JSON with bit-exact float round trips
//! - Task log: load, append one normalized task, rewrite
//!
//! ```rust,no_run
//! use triangle_time::storage::{load_tasks, save_params};
//! use triangle_time::training::fit;
//!
//! let tasks = load_tasks("data/samples/example_tasks.csv")?;
//! let params = fit(&tasks, true)?;
//! save_params("model_params.json", &params)?;
//! # Ok::<(), triangle_time::Error>(())
//! ```

mod params;
mod table;

pub use params::{export_params, load_params, save_params};
pub use table::{
    batch_to_tasks, read_csv, read_parquet, task_schema, tasks_to_batch, write_csv, write_parquet,
};

use std::path::Path;

use crate::model::normalize;
use crate::schema::TaskRecord;
use crate::{Error, Result};

/// On-disk layout of a task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl TableFormat {
    /// Pick the format from a path's extension (`.parquet`/`.pq`, else CSV).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") || ext.eq_ignore_ascii_case("pq") => {
                Self::Parquet
            }
            _ => Self::Csv,
        }
    }
}

/// Load a task table.
///
/// # Errors
///
/// Returns `MissingFile` if the path does not exist, or a decoding error
pub fn load_tasks(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = require_file(path.as_ref())?;
    let tasks = match TableFormat::from_path(path) {
        TableFormat::Csv => read_csv(path)?,
        TableFormat::Parquet => read_parquet(path)?,
    };
    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Save a task table, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if the table cannot be encoded or written
pub fn save_tasks(path: impl AsRef<Path>, tasks: &[TaskRecord]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    match TableFormat::from_path(path) {
        TableFormat::Csv => write_csv(path, tasks)?,
        TableFormat::Parquet => write_parquet(path, tasks)?,
    }
    tracing::debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

/// Normalize `task` and append it to the task log at `path`.
///
/// The existing log is read in full and rewritten. Returns the normalized
/// task as stored.
///
/// # Errors
///
/// Returns error if the existing log cannot be read or the new one written
pub fn append_task(path: impl AsRef<Path>, task: &TaskRecord) -> Result<TaskRecord> {
    let path = path.as_ref();
    let mut tasks = if path.exists() {
        load_tasks(path)?
    } else {
        Vec::new()
    };

    let normalized = normalize(task);
    tasks.push(normalized.clone());
    save_tasks(path, &tasks)?;
    tracing::info!(path = %path.display(), rows = tasks.len(), "appended task to log");
    Ok(normalized)
}

fn require_file(path: &Path) -> Result<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::MissingFile(path.to_path_buf()))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}
