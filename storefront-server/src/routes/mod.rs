//! Route handlers for storefront-server
//!
//! Organized by resource type:
//! - users: create, list, fetch and rename users
//! - products: the same surface for products
//! - orders: user/product pairs, read back joined
//! - health: liveness and database info

pub mod health;
pub mod orders;
pub mod products;
pub mod users;

pub use health::*;
pub use orders::*;
pub use products::*;
pub use users::*;

pub const WELCOME_MESSAGE: &str = "Welcome to the storefront API";

/// GET /api - Fixed welcome string
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
