//! Authentication route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::Deserialize;

use super::ApiResponse;
use crate::db::PgUserStore;
use crate::error::Result;
use crate::models::user::{LoginBody, UserBody};
use crate::services::auth::{AuthService, TokenIssuer};
use crate::state::AppState;

/// Registration request body.
///
/// Fields default to empty so that missing values surface as the
/// service's validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserBody>>)> {
    let service = AuthService::new(
        PgUserStore::new(state.pool().clone()),
        TokenIssuer::new(state.auth()),
    );

    let user = service.register(&body.username, &body.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("user registered successfully", user)),
    ))
}

/// Login and receive a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginBody>>> {
    let service = AuthService::new(
        PgUserStore::new(state.pool().clone()),
        TokenIssuer::new(state.auth()),
    );

    let result = service.login(&body.username, &body.password).await?;

    Ok(Json(ApiResponse::new("login successful", result)))
}

/// Authentication routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
