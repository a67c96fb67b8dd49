//! Session persistence on top of a key-value backend.

use std::sync::Arc;

use shipboard_kv::{KeyValueStore, keys};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::SessionError;
use crate::record::{SESSION_TTL, SessionRecord};

/// Maps opaque session identifiers to [`SessionRecord`]s.
///
/// Records live under `"__session_id__" + session_id` with a backend TTL of
/// [`SESSION_TTL`]. Cloning is cheap; clones share the backend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persists `record` under a freshly generated identifier and returns it.
    ///
    /// # Errors
    ///
    /// `SessionError::Store` if the backend write fails.
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    pub async fn create_session(&self, record: &SessionRecord) -> Result<String, SessionError> {
        let session_id = Uuid::new_v4().to_string();
        let value = serde_json::to_string(record).map_err(SessionError::Serialization)?;

        self.backend
            .set(&keys::sessions::by_id(&session_id), &value, Some(SESSION_TTL))
            .await?;

        debug!(expires_at = %record.expires_at, "Session created");

        Ok(session_id)
    }

    /// Loads the record for `session_id`.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotFound` if there is no such session (never issued,
    ///   deleted, or expired by the backend)
    /// - `SessionError::Store` if the backend read fails
    /// - `SessionError::Deserialization` if the stored value is corrupt
    #[instrument(skip_all)]
    pub async fn get(&self, session_id: &str) -> Result<SessionRecord, SessionError> {
        let value = self
            .backend
            .get(&keys::sessions::by_id(session_id))
            .await?
            .ok_or(SessionError::NotFound)?;

        serde_json::from_str(&value).map_err(SessionError::Deserialization)
    }

    /// Deletes the session. Expiring an unknown session is not an error.
    #[instrument(skip_all)]
    pub async fn expire(&self, session_id: &str) -> Result<(), SessionError> {
        self.backend
            .delete(&keys::sessions::by_id(session_id))
            .await?;

        debug!("Session expired");

        Ok(())
    }
}
