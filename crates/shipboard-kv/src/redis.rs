//! Redis backend.

use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, instrument};

use crate::store::{KeyValueStore, KvError};

/// Redis client with automatic reconnection.
///
/// Keys embed session identifiers, so they are never logged.
///
/// The connection manager is cloned per call; clones share one multiplexed
/// connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Connects to Redis.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `KvError::Redis` if the URL is invalid or the connection fails.
    pub async fn connect(redis_url: &str) -> Result<Self, KvError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    #[instrument(skip_all, fields(kv.operation = "GET"))]
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.conn.clone();
        let value = conn.get::<_, Option<String>>(key).await?;

        debug!(hit = value.is_some(), "Key lookup");

        Ok(value)
    }

    #[instrument(skip_all, fields(kv.operation = "SET"))]
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), KvError> {
        let mut conn = self.conn.clone();

        match ttl {
            // SETEX rejects a zero expiry
            Some(ttl) => {
                conn.set_ex::<_, _, ()>(key, value, ttl.as_secs().max(1))
                    .await?
            }
            None => conn.set::<_, _, ()>(key, value).await?,
        }

        debug!(kv.ttl_secs = ?ttl.map(|t| t.as_secs()), "Key set");

        Ok(())
    }

    #[instrument(skip_all, fields(kv.operation = "DEL"))]
    async fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(key).await?;

        debug!("Key deleted");

        Ok(())
    }

    #[instrument(skip_all, fields(kv.operation = "TTL"))]
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, KvError> {
        let mut conn = self.conn.clone();

        match conn.ttl::<_, i64>(key).await? {
            secs if secs > 0 => Ok(Some(Duration::from_secs(secs as u64))),
            // -1 (no expiry) or -2 (doesn't exist)
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a running Redis instance

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_set_get_delete() {
        let store = RedisStore::connect("redis://localhost:6379").await.unwrap();

        store
            .set("shipboard:test:key", "value", Some(Duration::from_secs(60)))
            .await
            .unwrap();

        assert_eq!(
            store.get("shipboard:test:key").await.unwrap().as_deref(),
            Some("value")
        );
        assert!(store.ttl("shipboard:test:key").await.unwrap().is_some());

        store.delete("shipboard:test:key").await.unwrap();
        store.delete("shipboard:test:key").await.unwrap();

        assert_eq!(store.get("shipboard:test:key").await.unwrap(), None);
    }
}
