//! User domain types.
//!
//! These types represent validated domain objects separate from database row types.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{UserId, Username};

/// A registered user (domain type).
#[derive(Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// The user's username.
    pub username: Username,
    /// Salted password hash (never the raw password).
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

// Manual Debug so the password hash never lands in logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// A user that has not been persisted yet: no id, no timestamps.
/// The store assigns both on create.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// The user's username.
    pub username: Username,
    /// Salted password hash.
    pub password_hash: String,
}

/// The serialized shape of a user exposed to callers.
///
/// Deliberately has no field for the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserBody {
    /// Unique user ID.
    pub id: UserId,
    /// The user's username.
    pub username: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.into_inner(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// The serialized result of a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginBody {
    /// Signed session token.
    pub token: String,
    /// The authenticated user.
    pub user: UserBody,
}
