//! Runtime configuration
//!
//! Built once by the entry point and passed explicitly to the trainer and
//! storage calls; there is no process-wide default.
//!
//! Environment variables (all optional):
//! - `TT_USE_ENTROPY` (`1`, `true`, `yes`, `y`, `on` enable it; default on)
//! - `TT_MODEL_PARAMS_PATH` (default `model_params.json`)
//! - `TT_TASK_LOG_CSV_PATH` (default `data/tasks_logged.csv`)

use std::path::{Path, PathBuf};

/// Environment variable selecting the entropy model variant.
pub const ENV_USE_ENTROPY: &str = "TT_USE_ENTROPY";
/// Environment variable holding the model parameters path.
pub const ENV_MODEL_PARAMS_PATH: &str = "TT_MODEL_PARAMS_PATH";
/// Environment variable holding the task log path.
pub const ENV_TASK_LOG_CSV_PATH: &str = "TT_TASK_LOG_CSV_PATH";

/// Default location of the fitted parameters.
pub const DEFAULT_PARAMS_PATH: &str = "model_params.json";
/// Default location of the task log.
pub const DEFAULT_TASK_LOG_PATH: &str = "data/tasks_logged.csv";

/// Runtime configuration for the triangle-time system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    use_entropy: bool,
    params_path: PathBuf,
    task_log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_entropy: true,
            params_path: PathBuf::from(DEFAULT_PARAMS_PATH),
            task_log_path: PathBuf::from(DEFAULT_TASK_LOG_PATH),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            use_entropy: lookup(ENV_USE_ENTROPY)
                .map_or(defaults.use_entropy, |value| parse_bool(&value)),
            params_path: lookup(ENV_MODEL_PARAMS_PATH)
                .map_or(defaults.params_path, PathBuf::from),
            task_log_path: lookup(ENV_TASK_LOG_CSV_PATH)
                .map_or(defaults.task_log_path, PathBuf::from),
        }
    }

    /// Override the model variant.
    #[must_use]
    pub fn with_use_entropy(mut self, use_entropy: bool) -> Self {
        self.use_entropy = use_entropy;
        self
    }

    /// Apply an explicit model-variant choice, keeping the configured one
    /// when `choice` is `None`.
    #[must_use]
    pub fn with_entropy_override(self, choice: Option<bool>) -> Self {
        match choice {
            Some(use_entropy) => self.with_use_entropy(use_entropy),
            None => self,
        }
    }

    /// Override the parameters path.
    #[must_use]
    pub fn with_params_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_path = path.into();
        self
    }

    /// Override the task log path.
    #[must_use]
    pub fn with_task_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.task_log_path = path.into();
        self
    }

    /// Whether fits include the entropy term.
    #[must_use]
    pub const fn use_entropy(&self) -> bool {
        self.use_entropy
    }

    /// Location of the fitted parameters.
    #[must_use]
    pub fn params_path(&self) -> &Path {
        &self.params_path
    }

    /// Location of the task log.
    #[must_use]
    pub fn task_log_path(&self) -> &Path {
        &self.task_log_path
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
