use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Product, ProductDto, User, UserDto};

/// An order row. References one user and one product.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Order {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub product_id: i64,
}

/// An order joined with the records it references
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub user: User,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user: UserDto,
    pub product: ProductDto,
}

impl From<OrderDetail> for OrderDto {
    fn from(detail: OrderDetail) -> Self {
        Self {
            id: detail.order.id,
            created_at: detail.order.created_at,
            user: detail.user.into(),
            product: detail.product.into(),
        }
    }
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: i64,
    pub product_id: i64,
}
