//! Product store backed by `PostgreSQL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use stockroom_core::{Price, ProductId, Sku};

use super::{ProductStore, RepositoryError};
use crate::models::product::{NewProduct, Product};

/// `PostgreSQL`-backed [`ProductStore`].
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Create a new product store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    product_type: String,
    sku: String,
    image_url: Option<String>,
    description: Option<String>,
    quantity: i32,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let sku = Sku::parse(&row.sku)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid sku in database: {e}")))?;
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            product_type: row.product_type,
            sku,
            image_url: row.image_url,
            description: row.description,
            quantity: row.quantity,
            price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, type AS product_type, sku, image_url, description,
                   quantity, price, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, type AS product_type, sku, image_url, description,
                   quantity, price, created_at, updated_at
            FROM products
            WHERE sku = $1
            ",
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, type AS product_type, sku, image_url, description,
                   quantity, price, created_at, updated_at
            FROM products
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, type, sku, image_url, description, quantity, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, type AS product_type, sku, image_url, description,
                      quantity, price, created_at, updated_at
            ",
        )
        .bind(&product.name)
        .bind(&product.product_type)
        .bind(product.sku.as_str())
        .bind(&product.image_url)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price.amount())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("sku already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Product::try_from(row)
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE products
            SET name = $1, type = $2, sku = $3, image_url = $4, description = $5,
                quantity = $6, price = $7, updated_at = $8
            WHERE id = $9
            RETURNING id, name, type AS product_type, sku, image_url, description,
                      quantity, price, created_at, updated_at
            ",
        )
        .bind(&product.name)
        .bind(&product.product_type)
        .bind(product.sku.as_str())
        .bind(&product.image_url)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.price.amount())
        .bind(product.updated_at)
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("sku already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
