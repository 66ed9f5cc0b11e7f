//! storefront-server: HTTP API over users, products and orders
//!
//! Handlers receive a [`Database`] through [`AppState`], call one typed query
//! per stage and reply with DTO projections of the stored records.

pub mod db;
pub mod error;
pub mod extractors;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use db::Database;
pub use error::{ApiError, ApiResult, StoreError, StoreResult};
pub use server::{build_router, run_server, ServeError, ServerConfig};
pub use state::AppState;
