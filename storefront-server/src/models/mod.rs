//! Persisted records and their wire projections
//!
//! Records (`User`, `Product`, `Order`) mirror table rows. DTOs are what
//! handlers serialize; each is a plain field copy of its record.

use serde::{Deserialize, Deserializer};

pub mod health;
pub mod order;
pub mod product;
pub mod user;

pub use health::{DatabaseHealth, HealthResponse};
pub use order::{CreateOrderRequest, Order, OrderDetail, OrderDto};
pub use product::{CreateProductRequest, Product, ProductDto, UpdateProductRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserDto};

/// Read a text field where JSON `null` means the same as absent: "".
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
