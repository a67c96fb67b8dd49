//! # Shipboard DB
//!
//! PostgreSQL connection pool and schema migrations.
//!
//! The schema lives in the workspace-level `migrations/` directory and is
//! embedded into the binary at compile time, so the CLI can migrate a database
//! without the source tree being present.
//!
//! # Example
//!
//! ```ignore
//! use shipboard_db::{DatabaseConfig, init_db_pool, run_migrations};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = init_db_pool(&config).await?;
//! run_migrations(&pool).await?;
//! ```

use std::env;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Embedded schema migrations, applied in version order, each in its own transaction.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connection settings for the relational store.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `5`)
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            url: env::var("DATABASE_URL")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        })
    }
}

/// Opens a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and is shared by every request
/// handler through the application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Applies every migration that has not been recorded yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!(
        available = MIGRATOR.iter().count(),
        "Database migrations applied"
    );
    Ok(())
}
