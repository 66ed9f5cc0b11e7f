//! SQLite database layer for storefront-server
//!
//! A single `sqlx` pool over one database file. The schema is created on open;
//! there is no migration history, only `CREATE TABLE IF NOT EXISTS`.
//!
//! Entity operations live in the submodules as inherent methods on
//! [`Database`], so handlers only ever hold one cloneable handle.

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::StoreResult;

mod orders;
mod products;
mod users;

/// Kept low: SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const IN_MEMORY: &str = ":memory:";

/// Tables in creation order; `orders` references the other two.
const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            first_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            product_name TEXT NOT NULL DEFAULT '',
            serial_number TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id),
            product_id INTEGER NOT NULL REFERENCES products(id)
        );
        "#,
    ),
];

/// Cloneable store handle shared by all handlers
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    path: PathBuf,
}

impl Database {
    /// Open or create the database file at the given path and bring the
    /// schema up to date.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        info!("Database connection established: {}", path.display());

        let db = Self { pool, path };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    ///
    /// Every SQLite connection to `:memory:` is a separate database, so the
    /// pool is pinned to one connection that never expires.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            path: PathBuf::from(IN_MEMORY),
        };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Get the database file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get database file size in bytes
    pub fn size_bytes(&self) -> Option<u64> {
        if self.path.as_os_str() == IN_MEMORY {
            return None;
        }
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create any missing tables. Idempotent.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        info!("Running migrations...");

        for (table, ddl) in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await?;
            debug!(table = *table, "table ready");
        }

        info!("Database migrations complete");
        Ok(())
    }
}
