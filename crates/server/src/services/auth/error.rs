//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// Invalid credentials (wrong password or user not found).
    ///
    /// Both cases produce this same variant and message so a caller
    /// cannot tell whether the username exists.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username already taken.
    #[error("username already exists")]
    UsernameTaken,

    /// The token signing secret is not configured. This is a deployment
    /// problem, not something a retry can fix.
    #[error("JWT_SECRET is not configured")]
    MissingSecret,

    /// The presented token failed signature or expiry checks.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Signing a token failed.
    #[error("token signing failed: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
