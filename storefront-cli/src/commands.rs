//! Subcommand arguments and runners

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use storefront_server::{Database, ServerConfig};
use tracing::info;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "STOREFRONT_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "STOREFRONT_PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite database file (created if missing)
    #[arg(long, env = "STOREFRONT_DB", default_value = "storefront.db")]
    pub db_path: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "STOREFRONT_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "STOREFRONT_DB", default_value = "storefront.db")]
    pub db_path: PathBuf,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = open_database(&args.db_path).await?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        request_timeout: Duration::from_secs(args.timeout),
    };

    storefront_server::run_server(db, config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Create or update the schema, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = open_database(&args.db_path).await?;
    db.close().await;

    info!("Schema is up to date at {}", args.db_path.display());
    Ok(())
}

async fn open_database(path: &Path) -> Result<Database> {
    info!("Opening database at {}", path.display());

    Database::open(path)
        .await
        .with_context(|| format!("Failed to connect to the database at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        assert_eq!(args.port, 3000);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.db_path, PathBuf::from("storefront.db"));
        assert_eq!(args.bind, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn serve_rejects_bad_bind_address() {
        assert!(ServeArgs::try_parse_from(["serve", "--bind", "not-an-ip"]).is_err());
    }

    #[tokio::test]
    async fn migrate_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("storefront.db");

        run_migrate(MigrateArgs {
            db_path: db_path.clone(),
        })
        .await
        .unwrap();

        assert!(db_path.exists());
    }
}
