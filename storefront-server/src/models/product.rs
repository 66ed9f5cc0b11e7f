use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub product_name: String,
    pub serial_number: String,
}

/// Outbound projection of [`Product`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub product_name: String,
    pub serial_number: String,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            serial_number: product.serial_number.clone(),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            serial_number: product.serial_number,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub product_name: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProductRequest {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub product_name: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub serial_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_drops_timestamp() {
        let product = Product {
            id: 3,
            created_at: Utc::now(),
            product_name: "Difference Engine".to_string(),
            serial_number: "DE-0001".to_string(),
        };

        let value = serde_json::to_value(ProductDto::from(&product)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "product_name": "Difference Engine",
                "serial_number": "DE-0001"
            })
        );
    }
}
