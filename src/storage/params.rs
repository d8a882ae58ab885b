//! Model parameters as JSON

use std::path::Path;

use super::{ensure_parent, require_file};
use crate::schema::ModelParameters;
use crate::Result;

/// Load model parameters from a JSON file.
///
/// # Errors
///
/// Returns `MissingFile` if the file does not exist, or a JSON error if it
/// does not hold a parameter set
pub fn load_params(path: impl AsRef<Path>) -> Result<ModelParameters> {
    let path = require_file(path.as_ref())?;
    let text = std::fs::read_to_string(path)?;
    let params = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded model parameters");
    Ok(params)
}

/// Save model parameters as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn save_params(path: impl AsRef<Path>, params: &ModelParameters) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_string_pretty(params)?)?;
    tracing::debug!(path = %path.display(), "saved model parameters");
    Ok(())
}

/// Copy a parameters file byte for byte.
///
/// # Errors
///
/// Returns `MissingFile` if `source` does not exist, or an IO error
pub fn export_params(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let source = require_file(source.as_ref())?;
    let dest = dest.as_ref();
    ensure_parent(dest)?;
    std::fs::copy(source, dest)?;
    Ok(())
}
