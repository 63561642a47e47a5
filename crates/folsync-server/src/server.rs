// Rust guideline compliant 2026-10-19

//! HTTP runtime for Folsync.
//!
//! The dataset index lives behind `RwLock<Option<Arc<DatasetIndex>>>`. Handlers
//! clone the `Arc` under a short read lock and work on that snapshot; a reload
//! builds the replacement outside the lock and swaps it in. `None` means no
//! dataset has loaded yet, and searches answer with `data_unavailable`.

use crate::logging::{init_tracing, LogFormat};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use folsync_app::{
    load_index, search, AppContext, AppError, DatasetProvider, ErrorCode, ErrorEnvelope,
    FileDatasetProvider, SearchRequest, SearchResponse, StatusReport,
};
use folsync_core::{DatasetIndex, Error as CoreError};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Runtime options for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Dataset JSON file served by the index.
    pub dataset_path: PathBuf,
    /// Address to bind.
    pub bind_addr: String,
    /// Port to listen on.
    pub port: u16,
    /// Logging level.
    pub log_level: String,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/dataset.json"),
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ServerOptions {
    /// Derives options from a loaded application context.
    #[must_use]
    pub fn from_context(context: &AppContext) -> Self {
        let config = context.config();
        Self {
            dataset_path: context.dataset_path(),
            bind_addr: config.bind_addr.clone(),
            port: config.port,
            log_level: config.log_level.clone(),
            log_file: config.log_file.clone(),
        }
    }
}

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// IO errors during runtime setup, bind or serve.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    index: Arc<RwLock<Option<Arc<DatasetIndex>>>>,
    provider: Arc<dyn DatasetProvider>,
}

impl ServerState {
    /// Creates state with an already built index.
    pub fn new(provider: Arc<dyn DatasetProvider>, index: Arc<DatasetIndex>) -> Self {
        Self {
            index: Arc::new(RwLock::new(Some(index))),
            provider,
        }
    }

    /// Creates state by loading the provider once.
    ///
    /// A failed initial load is logged and leaves no index, so the server
    /// still starts, reports `loaded: false` and rejects searches until a
    /// reload succeeds.
    pub fn load(provider: Arc<dyn DatasetProvider>) -> Self {
        let index = load_index(provider.as_ref())
            .inspect_err(|err| {
                tracing::warn!(error = %err, "initial dataset load failed, no dataset loaded");
            })
            .ok();
        Self {
            index: Arc::new(RwLock::new(index)),
            provider,
        }
    }

    /// Returns the current index snapshot, if a dataset has loaded.
    pub fn snapshot(&self) -> Option<Arc<DatasetIndex>> {
        let guard = self.index.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.as_ref().map(Arc::clone)
    }

    /// Returns the current index snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DatasetUnavailable`] if no dataset has loaded.
    pub fn require_index(&self) -> Result<Arc<DatasetIndex>, AppError> {
        self.snapshot().ok_or(AppError::Core(CoreError::DatasetUnavailable))
    }

    /// Describes the current load state.
    pub fn status(&self) -> StatusReport {
        self.snapshot()
            .map(|index| StatusReport::from_index(&index))
            .unwrap_or_default()
    }

    /// Rebuilds the index from the provider and installs it.
    ///
    /// On failure the previous index stays in place.
    ///
    /// # Errors
    ///
    /// Returns the provider error.
    pub fn reload(&self) -> Result<Arc<DatasetIndex>, AppError> {
        let index = load_index(self.provider.as_ref()).inspect_err(|err| {
            tracing::warn!(error = %err, "dataset reload failed, keeping previous index");
        })?;
        let mut guard = self.index.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(Arc::clone(&index));
        tracing::info!(entries = index.len(), "dataset reloaded");
        Ok(index)
    }
}

/// Error response carrying the standard envelope.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code() {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::DataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::JsonError | ErrorCode::DatasetError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::IoError | ErrorCode::ConfigError | ErrorCode::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorEnvelope::from_error(&self.0))).into_response()
    }
}

/// Builds the HTTP router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/status", get(status_handler))
        .route("/api/search", post(search_handler))
        .route("/api/reload", post(reload_handler))
        .with_state(state)
}

/// Serves the router on an already bound listener until ctrl-c.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve(listener: tokio::net::TcpListener, state: ServerState) -> Result<(), ServerError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Runs the HTTP server.
///
/// # Arguments
///
/// * `options` - Server runtime options
///
/// # Returns
///
/// Ok if the server exits gracefully.
///
/// # Errors
///
/// Returns an error if the runtime cannot be initialized, the address cannot
/// be bound, or the server fails.
pub fn run(options: ServerOptions) -> Result<(), ServerError> {
    let _guard = init_tracing(
        &options.log_level,
        options.log_file.as_deref(),
        LogFormat::Json,
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let provider: Arc<dyn DatasetProvider> =
            Arc::new(FileDatasetProvider::new(options.dataset_path.clone()));
        let state = ServerState::load(provider);

        let listener =
            tokio::net::TcpListener::bind((options.bind_addr.as_str(), options.port)).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            dataset = %options.dataset_path.display(),
            "server listening"
        );
        serve(listener, state).await
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

async fn health_check() -> &'static str {
    "ok"
}

async fn status_handler(State(state): State<ServerState>) -> Json<StatusReport> {
    Json(state.status())
}

async fn search_handler(
    State(state): State<ServerState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let index = state.require_index()?;
    Ok(Json(search(&request, &index)))
}

async fn reload_handler(State(state): State<ServerState>) -> Result<Json<StatusReport>, ApiError> {
    let reloader = state.clone();
    let index = tokio::task::spawn_blocking(move || reloader.reload())
        .await
        .map_err(|err| AppError::Internal(format!("reload task failed: {}", err)))??;
    Ok(Json(StatusReport::from_index(&index)))
}
