/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{ErrorKind, RosterError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => ServerError::NotFound(message),
            ErrorKind::ConstraintViolation => ServerError::Conflict(message),
            ErrorKind::Validation => ServerError::Validation(message),
            ErrorKind::Internal => ServerError::Internal(message),
        }
    }
}

impl ServerError {
    /// Kind string sent to clients alongside the message
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServerError::NotFound(_) => ErrorKind::NotFound,
            ServerError::Conflict(_) => ErrorKind::ConstraintViolation,
            ServerError::Validation(_) => ErrorKind::Validation,
            _ => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::ConstraintViolation => StatusCode::CONFLICT,
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let error_message = if kind == ErrorKind::Internal {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Request rejected ({}): {}", kind.as_str(), self);
            self.to_string()
        };

        let body = Json(json!({
            "error": error_message,
            "kind": kind.as_str(),
        }));

        (status, body).into_response()
    }
}
