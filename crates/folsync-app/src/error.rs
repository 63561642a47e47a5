// Rust guideline compliant 2026-10-19

//! Error handling for Folsync application services.

use folsync_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// IO failure while reading dataset or export files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The dataset source has an unusable shape.
    DatasetError,
    /// The requested data has not been loaded.
    DataUnavailable,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded or validated.
    ConfigError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected runtime failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Internal(_) => ErrorCode::Unknown,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Dataset(_) => ErrorCode::DatasetError,
                CoreError::DatasetUnavailable => ErrorCode::DataUnavailable,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Selector(_) => ErrorCode::Unknown,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::Json(err)) => Some(serde_json::json!({
                "line": err.line(),
                "column": err.column(),
            })),
            _ => None,
        }
    }
}
