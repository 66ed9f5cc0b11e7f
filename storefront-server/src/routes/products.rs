//! Product routes

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::extractors::IdParam;
use crate::models::{CreateProductRequest, Product, ProductDto, UpdateProductRequest};
use crate::state::AppState;

pub const PRODUCT_NOT_FOUND: &str = "product does not exist";

pub async fn find_product(db: &Database, id: i64) -> ApiResult<Product> {
    db.get_product(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(PRODUCT_NOT_FOUND.into()))
}

/// POST /api/products - Create a product
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<Json<ProductDto>> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let product = state.db().create_product(&req).await?;
    info!(product_id = product.id, "product created");

    Ok(Json(product.into()))
}

/// GET /api/products - List all products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductDto>>> {
    let products = state.db().list_products().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /api/products/{id} - Get a single product
pub async fn get_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<Json<ProductDto>> {
    let product = find_product(state.db(), id).await?;
    Ok(Json(product.into()))
}

/// PUT /api/products/{id} - Overwrite name and serial number
pub async fn update_product(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> ApiResult<Json<ProductDto>> {
    let mut product = find_product(state.db(), id).await?;

    let Json(update) = body.map_err(|e| ApiError::Deserialization(e.body_text()))?;

    product.product_name = update.product_name;
    product.serial_number = update.serial_number;

    state.db().save_product(&product).await?;
    info!(product_id = product.id, "product updated");

    Ok(Json(ProductDto::from(&product)))
}
