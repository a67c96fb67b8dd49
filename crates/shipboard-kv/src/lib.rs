//! # Shipboard KV
//!
//! Key-value storage used for sessions and the clipboard payload.
//!
//! This crate provides:
//! - the [`KeyValueStore`] trait every backend implements
//! - [`RedisStore`], the production backend
//! - [`MemoryStore`], an in-process backend for tests and local runs
//! - key namespacing helpers in [`keys`]
//! - backend configuration from environment variables
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shipboard_kv::{KeyValueStore, KvConfig, RedisStore};
//!
//! let config = KvConfig::from_env();
//! let store: Arc<dyn KeyValueStore> = Arc::new(RedisStore::connect(&config.redis_url).await?);
//!
//! store.set("key", "value", None).await?;
//! let value = store.get("key").await?;
//! ```

pub mod config;
pub mod keys;
pub mod memory;
pub mod redis;
pub mod store;

pub use config::KvConfig;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;
pub use store::{KeyValueStore, KvError};
