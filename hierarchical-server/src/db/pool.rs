//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool.
///
/// Session settings (sslmode, `TimeZone`) come from `config`.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::default();
/// let pool = create_pool(&config).await?;
/// ping(&pool).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `config` - connection settings
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Verify the database answers a trivial query.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DB_HOST=... DB_USER=... DB_NAME=... cargo test -p hierarchical-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DatabaseConfig::from_env().expect("invalid DB_* environment");
        let pool = create_pool(&config).await.expect("pool creation failed");

        ping(&pool).await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn session_time_zone_applied() {
        let config = DatabaseConfig::from_env().expect("invalid DB_* environment");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let (tz,): (String,) = sqlx::query_as("SHOW TIME ZONE")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(tz, config.time_zone.name());
    }
}
