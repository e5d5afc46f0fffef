//! Product route handlers.
//!
//! All product routes require authentication via the [`CurrentUser`]
//! extractor.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{post, put},
};
use serde::Deserialize;

use stockroom_core::ProductId;

use super::ApiResponse;
use crate::db::PgProductStore;
use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::product::{ProductBody, ProductListBody};
use crate::services::inventory::{CreateProductInput, InventoryService};
use crate::state::AppState;

/// Product creation request body.
///
/// Fields default so missing values surface as the service's validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub product_type: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<CreateProductRequest> for CreateProductInput {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            product_type: body.product_type,
            sku: body.sku,
            image_url: body.image_url,
            description: body.description,
            quantity: body.quantity,
            price: body.price,
        }
    }
}

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    #[serde(default)]
    pub quantity: Option<i32>,
}

/// Create a new product.
pub async fn create_product(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductBody>>)> {
    let service = InventoryService::new(PgProductStore::new(state.pool().clone()));

    let product = service.create_product(body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("product created successfully", product)),
    ))
}

/// List products with pagination.
pub async fn list_products(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ProductListBody>>> {
    let service = InventoryService::new(PgProductStore::new(state.pool().clone()));

    let listing = service.list_products(query.page, query.limit).await?;

    Ok(Json(ApiResponse::new(
        "products retrieved successfully",
        listing,
    )))
}

/// Update the stock quantity of a product.
pub async fn update_quantity(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(product_id): Path<ProductId>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Result<Json<ApiResponse<ProductBody>>> {
    let service = InventoryService::new(PgProductStore::new(state.pool().clone()));

    let product = service.update_quantity(product_id, body.quantity).await?;

    Ok(Json(ApiResponse::new(
        "product quantity updated successfully",
        product,
    )))
}

/// Product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/{product_id}/quantity", put(update_quantity))
}
