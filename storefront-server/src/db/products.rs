//! Product queries

use chrono::Utc;

use super::Database;
use crate::error::StoreResult;
use crate::models::{CreateProductRequest, Product};

impl Database {
    pub async fn create_product(&self, req: &CreateProductRequest) -> StoreResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (created_at, product_name, serial_number)
            VALUES (?, ?, ?)
            RETURNING id, created_at, product_name, serial_number
            "#,
        )
        .bind(Utc::now())
        .bind(&req.product_name)
        .bind(&req.serial_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, created_at, product_name, serial_number FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, created_at, product_name, serial_number FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn save_product(&self, product: &Product) -> StoreResult<()> {
        sqlx::query("UPDATE products SET product_name = ?, serial_number = ? WHERE id = ?")
            .bind(&product.product_name)
            .bind(&product.serial_number)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
