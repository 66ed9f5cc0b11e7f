//! Order routes

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use super::{find_product, find_user};
use crate::error::{ApiError, ApiResult};
use crate::extractors::IdParam;
use crate::models::{CreateOrderRequest, OrderDetail, OrderDto};
use crate::state::AppState;

pub const ORDER_NOT_FOUND: &str = "order does not exist";

/// POST /api/orders - Order a product for a user
///
/// The user is checked before the product; the first miss is reported.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> ApiResult<Json<OrderDto>> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let user = find_user(state.db(), req.user_id).await?;
    let product = find_product(state.db(), req.product_id).await?;

    let order = state.db().create_order(user.id, product.id).await?;
    info!(order_id = order.id, user_id = user.id, product_id = product.id, "order created");

    Ok(Json(OrderDetail { order, user, product }.into()))
}

/// GET /api/orders - List all orders with their user and product
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<OrderDto>>> {
    let orders = state.db().list_order_details().await?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// GET /api/orders/{id} - Get a single order
pub async fn get_order(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<Json<OrderDto>> {
    let order = state
        .db()
        .get_order_detail(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(ORDER_NOT_FOUND.into()))?;

    Ok(Json(order.into()))
}
