//! Bearer-token authentication extractor.
//!
//! Verifies the `Authorization: Bearer` token with the same secret,
//! algorithm, and claim names used at issuance, then re-fetches the user
//! so tokens for deleted accounts stop working immediately.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use stockroom_core::UserId;

use crate::db::{PgUserStore, UserStore};
use crate::error::AppError;
use crate::models::user::User;
use crate::services::auth::TokenIssuer;
use crate::state::AppState;

/// The authenticated user for the current request.
///
/// Extracting this from a request without a valid bearer token rejects
/// the request with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("missing authorization header".to_owned()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("invalid authorization header".to_owned()))?;

        let claims = TokenIssuer::new(state.auth()).decode(token)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized("invalid token subject".to_owned()))?;

        let user = PgUserStore::new(state.pool().clone())
            .find_by_id(UserId::new(user_id))
            .await?
            .ok_or_else(|| AppError::Unauthorized("user not found".to_owned()))?;

        Ok(Self(user))
    }
}
