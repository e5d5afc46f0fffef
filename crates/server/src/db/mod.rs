//! Database operations for the Stockroom `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Password authentication accounts
//! - `products` - Inventory records
//!
//! Both carry the unique indexes that back the application-level
//! uniqueness pre-checks (username, sku).
//!
//! # Stores
//!
//! Persistence is abstracted behind the [`UserStore`] and [`ProductStore`]
//! traits so the service layer can be exercised against in-memory
//! implementations. The `PostgreSQL` adapters are [`PgUserStore`] and
//! [`PgProductStore`].
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p stockroom-cli -- migrate
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use stockroom_core::{ProductId, UserId};

use crate::models::product::{NewProduct, Product};
use crate::models::user::{NewUser, User};

pub mod products;
pub mod users;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod memory;

pub use products::PgProductStore;
pub use users::PgUserStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username or sku).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Persist a new user, assigning its id and timestamps.
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Persist changes to an existing user.
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;

    /// Delete a user by id. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Look up a product by id.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Look up a product by SKU.
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError>;

    /// Fetch a page of products, newest first.
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError>;

    /// Persist a new product, assigning its id and timestamps.
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// Persist changes to an existing product.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;

    /// Delete a product by id. Returns `true` if a row was removed.
    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError>;

    /// Count all products.
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
