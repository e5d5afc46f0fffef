//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{Price, ProductId, Sku};

/// An inventory product (domain type).
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product type/category.
    pub product_type: String,
    /// Stock-keeping unit, unique across all products.
    pub sku: Sku,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Optional product description.
    pub description: Option<String>,
    /// Units in stock, never negative.
    pub quantity: i32,
    /// Unit price.
    pub price: Price,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Set the stock quantity, bumping `updated_at`.
    ///
    /// `created_at` is untouched. Validation (non-negativity) is the
    /// caller's responsibility.
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }
}

/// A product that has not been persisted yet: no id, no timestamps.
/// The store assigns both on create.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Product type/category.
    pub product_type: String,
    /// Stock-keeping unit.
    pub sku: Sku,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Optional product description.
    pub description: Option<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Unit price.
    pub price: Price,
}

/// The serialized shape of a product exposed to callers.
///
/// The price is rendered as a floating-point number here; internally it
/// stays a fixed-precision decimal.
#[derive(Debug, Clone, Serialize)]
pub struct ProductBody {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product type/category.
    #[serde(rename = "type")]
    pub product_type: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Optional product description.
    pub description: Option<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Unit price as a floating-point number.
    pub price: f64,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductBody {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            product_type: product.product_type,
            sku: product.sku.into_inner(),
            image_url: product.image_url,
            description: product.description,
            quantity: product.quantity,
            price: product.price.to_f64(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListBody {
    /// The page of products, newest first.
    pub products: Vec<ProductBody>,
    /// The requested page number.
    pub page: i64,
    /// The requested page size.
    pub limit: i64,
}
