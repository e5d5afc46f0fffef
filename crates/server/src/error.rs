//! Unified error handling for the HTTP surface.
//!
//! Provides a unified `AppError` type that maps service error kinds to
//! response status codes. All route handlers return `Result<T, AppError>`.
//! Handlers branch on error kinds, never on message contents.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::inventory::InventoryError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Inventory operation failed.
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Database operation failed outside a service.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Request is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials | AuthError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::UsernameTaken => StatusCode::CONFLICT,
                AuthError::MissingSecret
                | AuthError::TokenSigning(_)
                | AuthError::PasswordHash
                | AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Inventory(err) => match err {
                InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
                InventoryError::SkuTaken => StatusCode::CONFLICT,
                InventoryError::NotFound => StatusCode::NOT_FOUND,
                InventoryError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::Database(_) | RepositoryError::DataCorruption(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// The message sent to the client. Internal failures are masked;
    /// validation and conflict messages pass through unchanged.
    fn public_message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::Validation(_)
                | AuthError::InvalidCredentials
                | AuthError::UsernameTaken => err.to_string(),
                AuthError::InvalidToken => "invalid authentication credentials".to_owned(),
                _ => "internal server error".to_owned(),
            },
            Self::Inventory(err) => match err {
                InventoryError::Validation(_)
                | InventoryError::SkuTaken
                | InventoryError::NotFound => err.to_string(),
                InventoryError::Repository(_) => "internal server error".to_owned(),
            },
            Self::Database(err) => match err {
                RepositoryError::NotFound => "not found".to_owned(),
                RepositoryError::Conflict(msg) => msg.clone(),
                _ => "internal server error".to_owned(),
            },
            Self::Unauthorized(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // The masked message goes to the client; the real one goes to the log.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request error");
        }

        let body = ErrorBody {
            success: false,
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
