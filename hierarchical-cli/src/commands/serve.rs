//! HTTP server command
//!
//! Reads database settings once, checks the connection, then serves
//! `GET /v1/syllabuses/{id}` until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::PgPool;

use hierarchical_server::db::{create_pool, migrations, ping};
use hierarchical_server::http::{run_server, ServerConfig, ServerError};
use hierarchical_server::{DatabaseConfig, SyllabusRepo, SyllabusService};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Seconds in-flight requests may run after a shutdown signal
    #[arg(long, default_value_t = 10)]
    pub shutdown_grace: u64,

    /// Create the syllabus tables if they are missing
    #[arg(long)]
    pub migrate: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            shutdown_grace: Duration::from_secs(self.shutdown_grace),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(?db_config, "Database config loaded");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to open database")?;
    ping(&pool).await.context("Failed to ping database")?;

    if args.migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let service = SyllabusService::new(SyllabusRepo::new(pool.clone()));

    // Run server (blocks until shutdown)
    let served = run_server(service, args.server_config()).await;
    finish(&pool, served).await
}

/// Close the pool whether or not the server stopped cleanly.
async fn finish(pool: &PgPool, served: Result<(), ServerError>) -> Result<()> {
    pool.close().await;
    served.context("Server error")
}
