//! Configuration modules for the Shipboard server.
//!
//! Each submodule covers one concern and is loaded from environment
//! variables (after `.env` has been read by `dotenvy`).
//!
//! # Modules
//!
//! - [`server`]: listen address
//! - [`session`]: session cookie attributes
//! - [`clipboard`]: clipboard value lifetime
//!
//! Database and key-value settings live next to their clients in
//! `shipboard_db::DatabaseConfig` and `shipboard_kv::KvConfig`.

pub mod clipboard;
pub mod server;
pub mod session;

use shipboard_db::DatabaseConfig;
use shipboard_kv::KvConfig;

use self::clipboard::ClipboardConfig;
use self::server::ServerConfig;
use self::session::SessionConfig;

/// Everything the server needs at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub kv: KvConfig,
    pub session: SessionConfig,
    pub clipboard: ClipboardConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            kv: KvConfig::from_env(),
            session: SessionConfig::from_env(),
            clipboard: ClipboardConfig::from_env(),
        })
    }
}
