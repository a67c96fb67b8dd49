use std::sync::Arc;

use anyhow::Context;
use shipboard_db::{PgPool, init_db_pool, run_migrations};
use shipboard_kv::{KeyValueStore, RedisStore};
use shipboard_session::SessionStore;

use crate::config::AppConfig;
use crate::config::clipboard::ClipboardConfig;
use crate::config::session::SessionConfig;
use crate::templates::Templates;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    /// Raw key-value access, used for clipboard values.
    pub kv: Arc<dyn KeyValueStore>,
    pub sessions: SessionStore,
    pub templates: Templates,
    pub session_config: SessionConfig,
    pub clipboard_config: ClipboardConfig,
}

impl AppState {
    /// Wires the session store onto `kv` and loads the page templates.
    pub fn new(
        db: PgPool,
        kv: Arc<dyn KeyValueStore>,
        session_config: SessionConfig,
        clipboard_config: ClipboardConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            db,
            sessions: SessionStore::new(kv.clone()),
            kv,
            templates: Templates::new().context("Failed to load templates")?,
            session_config,
            clipboard_config,
        })
    }
}

/// Connects to PostgreSQL and Redis, applies pending migrations and builds the
/// shared state.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&db)
        .await
        .context("Failed to apply migrations")?;

    let kv = RedisStore::connect(&config.kv.redis_url)
        .await
        .context("Failed to connect to Redis")?;

    AppState::new(
        db,
        Arc::new(kv),
        config.session.clone(),
        config.clipboard.clone(),
    )
}
