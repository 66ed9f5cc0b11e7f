//! Order queries
//!
//! Reads join users and products in the same statement so a list is one
//! round trip regardless of length.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::Database;
use crate::error::StoreResult;
use crate::models::{Order, OrderDetail, Product, User};

const ORDER_DETAIL_SELECT: &str = r#"
    SELECT o.id, o.created_at, o.user_id, o.product_id,
           u.created_at AS user_created_at, u.first_name, u.last_name,
           p.created_at AS product_created_at, p.product_name, p.serial_number
    FROM orders o
    JOIN users u ON u.id = o.user_id
    JOIN products p ON p.id = o.product_id
"#;

impl Database {
    /// Insert an order. Callers resolve both references first.
    pub async fn create_order(&self, user_id: i64, product_id: i64) -> StoreResult<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (created_at, user_id, product_id)
            VALUES (?, ?, ?)
            RETURNING id, created_at, user_id, product_id
            "#,
        )
        .bind(Utc::now())
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn list_order_details(&self) -> StoreResult<Vec<OrderDetail>> {
        let sql = format!("{ORDER_DETAIL_SELECT} ORDER BY o.id ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let details = rows
            .iter()
            .map(order_detail_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(details)
    }

    pub async fn get_order_detail(&self, id: i64) -> StoreResult<Option<OrderDetail>> {
        let sql = format!("{ORDER_DETAIL_SELECT} WHERE o.id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(order_detail_from_row).transpose()?)
    }
}

fn order_detail_from_row(row: &SqliteRow) -> Result<OrderDetail, sqlx::Error> {
    let user_id: i64 = row.try_get("user_id")?;
    let product_id: i64 = row.try_get("product_id")?;

    Ok(OrderDetail {
        order: Order {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            user_id,
            product_id,
        },
        user: User {
            id: user_id,
            created_at: row.try_get("user_created_at")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        },
        product: Product {
            id: product_id,
            created_at: row.try_get("product_created_at")?,
            product_name: row.try_get("product_name")?,
            serial_number: row.try_get("serial_number")?,
        },
    })
}
