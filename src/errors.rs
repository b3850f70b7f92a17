//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::config::{MSG_INTERNAL_ERROR, MSG_SERVICE_UNAVAILABLE, MSG_USER_NOT_FOUND};
use crate::types::MessageResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown driver or a credential that cannot form a DSN
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection could not be opened, or was used after close
    #[error("Connection error: {0}")]
    Connection(#[source] DbErr),

    /// Statement prepare/execute failure
    #[error("Query error: {0}")]
    Query(#[source] DbErr),

    #[error("User not found")]
    NotFound,

    /// Request body that cannot be read as form fields
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// Process-level failures outside the database (bind, serve)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => AppError::Connection(err),
            _ => AppError::Query(err),
        }
    }
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Query(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides driver details)
    fn user_message(&self) -> String {
        match self {
            AppError::NotFound => MSG_USER_NOT_FOUND.to_string(),
            AppError::BadRequest(_) => self.to_string(),
            AppError::Connection(e) => {
                tracing::error!("Connection error: {:?}", e);
                MSG_SERVICE_UNAVAILABLE.to_string()
            }
            AppError::Query(e) => {
                tracing::error!("Query error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Configuration(msg) | AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
