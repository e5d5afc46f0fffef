//! HTTP route handlers.
//!
//! Handlers construct the relevant service with the `PostgreSQL` store
//! and translate its result into the JSON response envelope.

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

pub mod auth;
pub mod products;

/// Standard JSON response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The response payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope.
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// All application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::routes())
        .nest("/products", products::routes())
}
