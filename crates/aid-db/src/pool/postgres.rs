//! PostgreSQL connection pool and schema migrations

use std::time::Duration;

use aid_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Pool tuning beyond what the environment configures
#[derive(Debug, Clone)]
struct PoolSettings {
    /// Maximum time to wait for a connection
    acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    idle_timeout: Duration,
    /// Maximum lifetime of a connection
    max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let settings = PoolSettings::default();

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect(&config.url)
        .await
}

/// Schema migrations, compiled into the binary from `migrations/`
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;

    info!(count = MIGRATOR.iter().count(), "Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PoolSettings::default();
        assert_eq!(settings.acquire_timeout, Duration::from_secs(10));
        assert_eq!(settings.idle_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_migrations_are_embedded_in_order() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert_eq!(versions.len(), 5);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_email_uniqueness_ignores_case() {
        let sql: String = MIGRATOR.iter().map(|m| m.sql.as_ref()).collect();
        assert!(sql.contains("users_email_key ON users (LOWER(email))"));
        assert!(sql.contains("donors_email_key ON donors (LOWER(email))"));
    }
}
