//! Error types for the backup scheduler
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

// == Scheduler Error Enum ==
/// Unified error type for the backup scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// No task carries the given id
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Task list could not be read or written
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SchedulerError {
    fn into_response(self) -> Response {
        let status = match &self {
            SchedulerError::TaskNotFound(_) => StatusCode::NOT_FOUND,
            SchedulerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SchedulerError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchedulerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the backup scheduler.
pub type Result<T> = std::result::Result<T, SchedulerError>;
