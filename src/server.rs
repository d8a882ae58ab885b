//! HTTP service
//!
//! Endpoints (JSON bodies use the task record field set, legacy names
//! included):
//! - `POST /predict_time`: estimate for one task with the current parameters
//! - `POST /log_task`: normalize a completed task and append it to the log
//! - `GET /health`
//!
//! Parameters are reloaded on every prediction so a refit is picked up
//! without a restart.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::model::predict_for_task;
use crate::schema::{ModelParameters, TaskRecord};
use crate::storage::{append_task, load_params};
use crate::{Error, Result};

/// Shared state of the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
    // Serializes read-modify-write cycles on the task log.
    log_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create handler state from the runtime configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            log_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Response of `POST /predict_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Identifier echoed from the request
    pub id: Option<String>,
    /// Predicted total time
    pub estimate: f64,
    /// Parameters the estimate was computed with
    pub model_params: ModelParameters,
}

/// Response of `POST /log_task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogTaskResponse {
    /// Always `"ok"` on success
    pub status: String,
    /// The normalized task as appended to the log
    pub task: TaskRecord,
}

/// Error body returned by the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human readable message
    pub detail: String,
}

/// Library error rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::MalformedInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, error = %self.0, "request failed");
        (
            status,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the router for the HTTP service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/predict_time", post(predict_time))
        .route("/log_task", post(log_task))
        .with_state(state)
}

/// Serve the HTTP API on `addr` until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails
pub async fn serve(config: Config, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving triangle-time API");

    axum::serve(listener, router(AppState::new(config)))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn predict_time(
    State(state): State<AppState>,
    Json(task): Json<TaskRecord>,
) -> std::result::Result<Json<PredictResponse>, ApiError> {
    let config = Arc::clone(&state.config);
    let params = blocking(move || load_params(config.params_path())).await?;

    let estimate = predict_for_task(&task, &params);
    tracing::debug!(id = task.id().unwrap_or(""), estimate, "predicted task");
    Ok(Json(PredictResponse {
        id: task.id().map(str::to_string),
        estimate,
        model_params: params,
    }))
}

async fn log_task(
    State(state): State<AppState>,
    Json(task): Json<TaskRecord>,
) -> std::result::Result<Json<LogTaskResponse>, ApiError> {
    let _guard = state.log_lock.lock().await;
    let config = Arc::clone(&state.config);
    let stored = blocking(move || append_task(config.task_log_path(), &task)).await?;

    Ok(Json(LogTaskResponse {
        status: "ok".to_string(),
        task: stored,
    }))
}

/// Run file IO off the async workers.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))?
}
