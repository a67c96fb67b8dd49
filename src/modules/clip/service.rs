use std::time::Duration;

use shipboard_core::AppError;
use shipboard_db::PgPool;
use shipboard_kv::{KeyValueStore, keys};
use shipboard_models::User;
use shipboard_observability::track_clipboard_broadcast;
use tracing::{debug, instrument};
use uuid::Uuid;

pub struct ClipService;

impl ClipService {
    /// The account behind a session, or `None` if it has been deleted since
    /// the login.
    #[instrument(skip(db))]
    pub async fn find_owner(db: &PgPool, user_id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, uid, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Replaces the user's clipboard value.
    #[instrument(skip(kv, content), fields(len = content.len()))]
    pub async fn broadcast(
        kv: &dyn KeyValueStore,
        uid: Uuid,
        content: &str,
        ttl: Option<Duration>,
    ) -> Result<(), AppError> {
        kv.set(&keys::clipboard::by_user(uid), content, ttl).await?;

        track_clipboard_broadcast();
        debug!("Clipboard updated");

        Ok(())
    }

    #[instrument(skip(kv))]
    pub async fn current(kv: &dyn KeyValueStore, uid: Uuid) -> Result<Option<String>, AppError> {
        Ok(kv.get(&keys::clipboard::by_user(uid)).await?)
    }
}
