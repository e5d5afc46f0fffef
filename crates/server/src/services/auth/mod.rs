//! Authentication service.
//!
//! Registration and login workflows: input validation, credential
//! verification, and session token issuance. Persistence is delegated to
//! an injected [`UserStore`].

mod error;
pub mod token;

pub use error::AuthError;
pub use token::{Claims, TokenIssuer};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use stockroom_core::Username;

use crate::db::{RepositoryError, UserStore};
use crate::models::user::{LoginBody, NewUser, UserBody};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service.
///
/// Handles user registration and login.
pub struct AuthService<S> {
    users: S,
    tokens: TokenIssuer,
}

impl<S: UserStore> AuthService<S> {
    /// Create a new authentication service.
    pub const fn new(users: S, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Register a new user with username and password.
    ///
    /// Checks run in order and the first failure wins: presence, username
    /// length, password length, username uniqueness. The uniqueness
    /// lookup is a pre-check only - the store's unique constraint is the
    /// authoritative guard, and a constraint violation from a concurrent
    /// registration surfaces as the same [`AuthError::UsernameTaken`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if the input is malformed.
    /// Returns `AuthError::UsernameTaken` if the username is in use.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserBody, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "username and password are required".to_owned(),
            ));
        }

        let username =
            Username::parse(username).map_err(|e| AuthError::Validation(e.to_string()))?;
        validate_password(password)?;

        if self
            .users
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                username,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UsernameTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user.into())
    }

    /// Login with username and password, issuing a session token.
    ///
    /// An unknown username and a wrong password both produce
    /// [`AuthError::InvalidCredentials`] so the response does not reveal
    /// which accounts exist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if either input is empty.
    /// Returns `AuthError::InvalidCredentials` if the credentials don't match.
    /// Returns `AuthError::MissingSecret` if no signing secret is configured.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginBody, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "username and password are required".to_owned(),
            ));
        }

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, user.username.as_str())?;

        Ok(LoginBody {
            token,
            user: user.into(),
        })
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// A malformed hash string verifies as `false` rather than erroring, so a
/// corrupted record behaves like a wrong password.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
