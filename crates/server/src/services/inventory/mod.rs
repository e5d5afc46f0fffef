//! Inventory service.
//!
//! Product creation, paginated listing, and stock quantity updates.
//! Persistence is delegated to an injected [`ProductStore`].

mod error;

pub use error::InventoryError;

use stockroom_core::{Price, ProductId, Sku};

use crate::db::{ProductStore, RepositoryError};
use crate::models::product::{NewProduct, ProductBody, ProductListBody};

/// Default page number for listings.
const DEFAULT_PAGE: i64 = 1;
/// Default page size for listings.
const DEFAULT_LIMIT: i64 = 10;
/// Largest allowed page size.
const MAX_LIMIT: i64 = 100;

/// Raw input for product creation.
///
/// Quantity and price are optional here because their absence is a
/// validation failure the service reports, not a transport-level error.
#[derive(Debug, Clone, Default)]
pub struct CreateProductInput {
    /// Product name.
    pub name: String,
    /// Product type/category.
    pub product_type: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Optional product description.
    pub description: Option<String>,
    /// Units in stock.
    pub quantity: Option<i32>,
    /// Unit price.
    pub price: Option<f64>,
}

/// Inventory service.
///
/// Handles product creation, listing, and quantity updates.
pub struct InventoryService<S> {
    products: S,
}

impl<S: ProductStore> InventoryService<S> {
    /// Create a new inventory service.
    pub const fn new(products: S) -> Self {
        Self { products }
    }

    /// Create a new product.
    ///
    /// Checks run in order and the first failure wins: presence,
    /// quantity, price, SKU length, SKU uniqueness. As with
    /// registration, the uniqueness lookup is a pre-check; the store's
    /// unique constraint settles races and surfaces as the same
    /// [`InventoryError::SkuTaken`].
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Validation` if the input is malformed.
    /// Returns `InventoryError::SkuTaken` if the SKU is in use.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ProductBody, InventoryError> {
        let (Some(quantity), Some(price)) = (input.quantity, input.price) else {
            return Err(required_fields());
        };
        if input.name.is_empty() || input.product_type.is_empty() || input.sku.is_empty() {
            return Err(required_fields());
        }

        if quantity < 0 {
            return Err(InventoryError::Validation(
                "quantity must be a non-negative number".to_owned(),
            ));
        }

        let price = Price::from_f64(price).map_err(|e| InventoryError::Validation(e.to_string()))?;

        let sku = Sku::parse(&input.sku).map_err(|e| InventoryError::Validation(e.to_string()))?;

        if self.products.find_by_sku(sku.as_str()).await?.is_some() {
            return Err(InventoryError::SkuTaken);
        }

        let product = self
            .products
            .create(NewProduct {
                name: input.name,
                product_type: input.product_type,
                sku,
                image_url: input.image_url,
                description: input.description,
                quantity,
                price,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => InventoryError::SkuTaken,
                other => InventoryError::Repository(other),
            })?;

        Ok(product.into())
    }

    /// List products, newest first, with offset pagination.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Validation` if page or limit is out of range.
    pub async fn list_products(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<ProductListBody, InventoryError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(InventoryError::Validation(
                "page must be a positive number".to_owned(),
            ));
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(InventoryError::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let offset = (page - 1) * limit;
        let products = self.products.find_all(limit, offset).await?;

        Ok(ProductListBody {
            products: products.into_iter().map(Into::into).collect(),
            page,
            limit,
        })
    }

    /// Set the stock quantity of a product.
    ///
    /// Bumps `updated_at`; `created_at` is untouched.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Validation` if the quantity is missing or
    /// negative, and `InventoryError::NotFound` if the product doesn't exist.
    pub async fn update_quantity(
        &self,
        id: ProductId,
        quantity: Option<i32>,
    ) -> Result<ProductBody, InventoryError> {
        let quantity = match quantity {
            Some(q) if q >= 0 => q,
            _ => {
                return Err(InventoryError::Validation(
                    "quantity must be a non-negative number".to_owned(),
                ));
            }
        };

        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound)?;

        product.set_quantity(quantity);

        let updated = self
            .products
            .update(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => InventoryError::NotFound,
                other => InventoryError::Repository(other),
            })?;

        Ok(updated.into())
    }
}

fn required_fields() -> InventoryError {
    InventoryError::Validation("name, type, sku, quantity, and price are required".to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryProductStore;

    fn service() -> InventoryService<InMemoryProductStore> {
        InventoryService::new(InMemoryProductStore::new())
    }

    fn widget(sku: &str) -> CreateProductInput {
        CreateProductInput {
            name: "Widget".to_owned(),
            product_type: "tool".to_owned(),
            sku: sku.to_owned(),
            image_url: None,
            description: Some("A widget".to_owned()),
            quantity: Some(5),
            price: Some(19.99),
        }
    }

    // Creation

    #[tokio::test]
    async fn test_create_product() {
        let service = service();

        let body = service.create_product(widget("WID-001")).await.unwrap();
        assert_eq!(body.name, "Widget");
        assert_eq!(body.sku, "WID-001");
        assert_eq!(body.quantity, 5);
        assert_eq!(body.price, 19.99);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "tool");
        assert!(json["price"].is_f64());
    }

    #[tokio::test]
    async fn test_create_requires_all_fields() {
        let service = service();

        let missing_quantity = CreateProductInput {
            quantity: None,
            ..widget("WID-001")
        };
        let err = service.create_product(missing_quantity).await.unwrap_err();
        assert!(
            matches!(&err, InventoryError::Validation(msg) if msg.contains("required"))
        );

        let missing_name = CreateProductInput {
            name: String::new(),
            ..widget("WID-001")
        };
        let err = service.create_product(missing_name).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        assert_eq!(service.products.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity_without_store_call() {
        let service = service();

        let input = CreateProductInput {
            quantity: Some(-1),
            ..widget("WID-001")
        };
        let err = service.create_product(input).await.unwrap_err();

        assert!(matches!(err, InventoryError::Validation(_)));
        assert_eq!(service.products.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price_without_store_call() {
        let service = service();

        let input = CreateProductInput {
            price: Some(-1.0),
            ..widget("WID-001")
        };
        let err = service.create_product(input).await.unwrap_err();

        assert!(matches!(err, InventoryError::Validation(_)));
        assert_eq!(service.products.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_short_sku() {
        let service = service();

        let err = service.create_product(widget("ab")).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_duplicate_sku_conflicts() {
        let service = service();

        service.create_product(widget("WID-001")).await.unwrap();
        let err = service.create_product(widget("WID-001")).await.unwrap_err();

        assert!(matches!(err, InventoryError::SkuTaken));
        assert_eq!(service.products.count().await.unwrap(), 1);
    }

    // Listing

    async fn seed(service: &InventoryService<InMemoryProductStore>, count: usize) {
        for i in 0..count {
            service
                .create_product(widget(&format!("SKU-{i:03}")))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_list_paginates_newest_first() {
        let service = service();
        seed(&service, 15).await;

        let first = service.list_products(Some(1), Some(10)).await.unwrap();
        assert_eq!(first.products.len(), 10);
        assert_eq!(first.page, 1);
        assert_eq!(first.products[0].sku, "SKU-014");
        assert_eq!(first.products[9].sku, "SKU-005");

        let second = service.list_products(Some(2), Some(10)).await.unwrap();
        assert_eq!(second.products.len(), 5);
        assert_eq!(second.products[0].sku, "SKU-004");
        assert_eq!(second.products[4].sku, "SKU-000");
    }

    #[tokio::test]
    async fn test_list_defaults() {
        let service = service();
        seed(&service, 15).await;

        let body = service.list_products(None, None).await.unwrap();
        assert_eq!(body.page, 1);
        assert_eq!(body.limit, 10);
        assert_eq!(body.products.len(), 10);
    }

    #[tokio::test]
    async fn test_list_rejects_bad_page_and_limit() {
        let service = service();

        assert!(matches!(
            service.list_products(Some(0), Some(10)).await.unwrap_err(),
            InventoryError::Validation(_)
        ));
        assert!(matches!(
            service.list_products(Some(1), Some(0)).await.unwrap_err(),
            InventoryError::Validation(_)
        ));
        assert!(matches!(
            service.list_products(Some(1), Some(101)).await.unwrap_err(),
            InventoryError::Validation(_)
        ));
    }

    // Quantity updates

    #[tokio::test]
    async fn test_update_quantity() {
        let service = service();
        let created = service.create_product(widget("WID-001")).await.unwrap();

        let updated = service
            .update_quantity(created.id, Some(0))
            .await
            .unwrap();

        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_quantity_missing_product() {
        let service = service();

        let err = service
            .update_quantity(ProductId::new(999), Some(3))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_quantity_rejects_negative_or_missing() {
        let service = service();
        let created = service.create_product(widget("WID-001")).await.unwrap();

        let err = service
            .update_quantity(created.id, Some(-3))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let err = service.update_quantity(created.id, None).await.unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let unchanged = service.update_quantity(created.id, Some(5)).await.unwrap();
        assert_eq!(unchanged.quantity, 5);
    }
}
