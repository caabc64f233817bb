use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the pool without dialing the database. Connections are opened on
    /// first use, so an unreachable database surfaces per request instead of
    /// aborting startup.
    pub fn new_pool(
        connection_string: &str,
        settings: &PoolSettings,
    ) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .min_connections(settings.min_connections)
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_lazy(connection_string)
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        info!(
            "Database pool configured (min: {}, max: {})",
            settings.min_connections, settings.max_connections
        );

        Ok(pool)
    }
}
