//! In-memory store implementations for tests.
//!
//! These enforce the same constraints the database does (unique username,
//! unique sku, newest-first ordering with id as tiebreak) so the service
//! layer can be exercised without a live `PostgreSQL` instance.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use stockroom_core::{ProductId, UserId};

use super::{ProductStore, RepositoryError, UserStore};
use crate::models::product::{NewProduct, Product};
use crate::models::user::{NewUser, User};

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub(crate) struct InMemoryUserStore {
    inner: Mutex<Table<User>>,
}

impl InMemoryUserStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        if table.rows.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::Conflict("username already exists".to_owned()));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(table.assign_id()),
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = user.clone();
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|u| u.id != id);
        Ok(table.rows.len() < before)
    }
}

/// In-memory [`ProductStore`].
#[derive(Default)]
pub(crate) struct InMemoryProductStore {
    inner: Mutex<Table<Product>>,
}

impl InMemoryProductStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.iter().find(|p| p.sku.as_str() == sku).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError> {
        let table = self.inner.lock().unwrap();
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_i32().cmp(&a.id.as_i32()))
        });

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        if table.rows.iter().any(|p| p.sku == product.sku) {
            return Err(RepositoryError::Conflict("sku already exists".to_owned()));
        }

        let now = Utc::now();
        let product = Product {
            id: ProductId::new(table.assign_id()),
            name: product.name,
            product_type: product.product_type,
            sku: product.sku,
            image_url: product.image_url,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let mut table = self.inner.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok(table.rows.len() < before)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let table = self.inner.lock().unwrap();
        Ok(i64::try_from(table.rows.len()).unwrap_or(i64::MAX))
    }
}
