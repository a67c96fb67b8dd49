//! The storage contract shared by every backend.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

/// Error type for key-value operations.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Key-value backend unavailable: {0}")]
    Unavailable(String),
}

/// A string-to-string store with optional per-key expiry.
///
/// Implementations must be safe to share between request tasks; the
/// application holds one instance behind an `Arc` for the process lifetime.
#[async_trait]
pub trait KeyValueStore: Debug + Send + Sync {
    /// Returns `Ok(None)` when the key is absent or has expired.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Writes `value`, replacing any previous value and TTL. `None` keeps the
    /// key until it is deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), KvError>;

    /// Removes the key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), KvError>;

    /// Remaining lifetime of the key, `None` if it is absent or never expires.
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, KvError>;
}
