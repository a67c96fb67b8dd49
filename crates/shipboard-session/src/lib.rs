//! # Shipboard Session
//!
//! Server-side sessions for cookie authentication.
//!
//! This crate provides:
//!
//! - [`record`]: the [`SessionRecord`] stored for every login
//! - [`store`]: [`SessionStore`], which issues opaque session identifiers and
//!   persists records in a key-value backend
//! - [`error`]: the [`SessionError`] taxonomy
//!
//! # Lifecycle
//!
//! A record is created once per successful login and lives for
//! [`SESSION_TTL`]. The backend entry carries the same TTL, so an abandoned
//! session disappears on its own; logout and server-detected expiry delete it
//! explicitly.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chrono::Utc;
//! use shipboard_kv::MemoryStore;
//! use shipboard_session::{SessionRecord, SessionStore};
//!
//! let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
//!
//! let record = SessionRecord::new(42, "a@b.com", Utc::now());
//! let session_id = sessions.create_session(&record).await?;
//!
//! let stored = sessions.get(&session_id).await?;
//! assert_eq!(stored.user_id, 42);
//!
//! sessions.expire(&session_id).await?;
//! ```

pub mod error;
pub mod record;
pub mod store;

pub use error::SessionError;
pub use record::{SESSION_TTL, SessionRecord};
pub use store::SessionStore;
