//! Triangle-time command line
//!
//! Usage:
//!   triangle-time fit <TASKS> [--params-path <FILE>] [--entropy | --no-entropy]
//!   triangle-time predict <TASK_JSON> [--params-path <FILE>]
//!   triangle-time evaluate <TASKS> [--params-path <FILE>]
//!   triangle-time export-params <DEST> [--source-path <FILE>]
//!   triangle-time log-task <TASK_JSON> [--log-path <FILE>]
//!   triangle-time serve [--addr <HOST:PORT>]
//!
//! Task tables may be CSV or Parquet (by extension). Defaults come from
//! `TT_USE_ENTROPY`, `TT_MODEL_PARAMS_PATH` and `TT_TASK_LOG_CSV_PATH`;
//! `--entropy`/`--no-entropy` take precedence over `TT_USE_ENTROPY`.
//!
//! Example:
//!   triangle-time fit data/samples/example_tasks.csv --params-path model_params.json

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use triangle_time::model::predict_for_task;
use triangle_time::storage::{append_task, export_params, load_params, load_tasks, save_params};
use triangle_time::training::{evaluate, Trainer};
use triangle_time::{Config, TaskRecord};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser)]
#[command(name = "triangle-time")]
#[command(version, about = "Fit, evaluate and apply the triangle time model")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fit model parameters from a table of historical tasks
    Fit {
        /// Task table (CSV or Parquet)
        tasks_path: PathBuf,

        /// Where to save the fitted parameters
        #[arg(long)]
        params_path: Option<PathBuf>,

        /// Include the mixing-entropy term
        #[arg(long, conflicts_with = "no_entropy")]
        entropy: bool,

        /// Fit the base model without the entropy term
        #[arg(long)]
        no_entropy: bool,
    },

    /// Predict total time for one task described in a JSON file
    Predict {
        /// Task JSON (fields of a task record)
        task_path: PathBuf,

        /// Fitted parameters
        #[arg(long)]
        params_path: Option<PathBuf>,
    },

    /// Report error metrics of the fitted model on a task table
    Evaluate {
        /// Task table (CSV or Parquet)
        tasks_path: PathBuf,

        /// Fitted parameters
        #[arg(long)]
        params_path: Option<PathBuf>,
    },

    /// Copy the parameters file to another location
    ExportParams {
        /// Destination path
        dest_path: PathBuf,

        /// Source parameters file
        #[arg(long)]
        source_path: Option<PathBuf>,
    },

    /// Normalize a completed task and append it to the task log
    LogTask {
        /// Task JSON (fields of a task record)
        task_path: PathBuf,

        /// Task log table
        #[arg(long)]
        log_path: Option<PathBuf>,
    },

    /// Serve the prediction and task-logging HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "TT_BIND_ADDR", default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
    },
}

/// Model variant requested on the command line, if any.
const fn entropy_choice(entropy: bool, no_entropy: bool) -> Option<bool> {
    match (entropy, no_entropy) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_fit(config: &Config, tasks_path: &Path) -> Result<()> {
    let tasks = load_tasks(tasks_path)
        .with_context(|| format!("loading tasks from {}", tasks_path.display()))?;
    tracing::info!(count = tasks.len(), path = %tasks_path.display(), "loaded tasks");

    let (params, summary) = Trainer::from_config(config)
        .fit_with_summary(&tasks)
        .context("fitting model")?;
    save_params(config.params_path(), &params).with_context(|| {
        format!("saving parameters to {}", config.params_path().display())
    })?;

    println!("{}", serde_json::to_string_pretty(&params)?);
    println!(
        "used {} of {} tasks (rank {}/{}), saved to {}",
        summary.records_used,
        tasks.len(),
        summary.rank,
        summary.columns,
        config.params_path().display()
    );
    Ok(())
}

fn cmd_predict(config: &Config, task_path: &Path) -> Result<()> {
    let task = read_task(task_path)?;
    let params = load_params(config.params_path()).with_context(|| {
        format!(
            "loading parameters from {} (run `triangle-time fit` first)",
            config.params_path().display()
        )
    })?;

    let estimate = predict_for_task(&task, &params);
    println!("{}", serde_json::to_string_pretty(&task)?);
    println!("Predicted total time: {estimate:.4}");
    Ok(())
}

fn cmd_evaluate(config: &Config, tasks_path: &Path) -> Result<()> {
    let tasks = load_tasks(tasks_path)
        .with_context(|| format!("loading tasks from {}", tasks_path.display()))?;
    let params = load_params(config.params_path())
        .with_context(|| format!("loading parameters from {}", config.params_path().display()))?;

    let report = evaluate(&tasks, &params).context("evaluating model")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_export_params(config: &Config, dest_path: &Path) -> Result<()> {
    export_params(config.params_path(), dest_path).with_context(|| {
        format!(
            "copying {} to {}",
            config.params_path().display(),
            dest_path.display()
        )
    })?;
    println!(
        "Copied {} -> {}",
        config.params_path().display(),
        dest_path.display()
    );
    Ok(())
}

fn cmd_log_task(config: &Config, task_path: &Path) -> Result<()> {
    let task = read_task(task_path)?;
    let stored = append_task(config.task_log_path(), &task)
        .with_context(|| format!("appending to {}", config.task_log_path().display()))?;
    println!("{}", serde_json::to_string_pretty(&stored)?);
    Ok(())
}

fn cmd_serve(config: Config, addr: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime
        .block_on(triangle_time::server::serve(config, addr))
        .with_context(|| format!("serving on {addr}"))
}

fn read_task(path: &Path) -> Result<TaskRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading task JSON {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("decoding task JSON {}", path.display()))
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Fit {
            tasks_path,
            params_path,
            entropy,
            no_entropy,
        } => {
            let config = with_params(config, params_path)
                .with_entropy_override(entropy_choice(entropy, no_entropy));
            cmd_fit(&config, &tasks_path)
        }
        Command::Predict {
            task_path,
            params_path,
        } => cmd_predict(&with_params(config, params_path), &task_path),
        Command::Evaluate {
            tasks_path,
            params_path,
        } => cmd_evaluate(&with_params(config, params_path), &tasks_path),
        Command::ExportParams {
            dest_path,
            source_path,
        } => cmd_export_params(&with_params(config, source_path), &dest_path),
        Command::LogTask {
            task_path,
            log_path,
        } => {
            let config = match log_path {
                Some(path) => config.with_task_log_path(path),
                None => config,
            };
            cmd_log_task(&config, &task_path)
        }
        Command::Serve { addr } => cmd_serve(config, addr),
    }
}

fn with_params(config: Config, params_path: Option<PathBuf>) -> Config {
    match params_path {
        Some(path) => config.with_params_path(path),
        None => config,
    }
}
