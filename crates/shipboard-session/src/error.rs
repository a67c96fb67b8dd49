//! Session store errors.

use shipboard_kv::KvError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No record under this id, including records the backend already expired.
    #[error("Session not found")]
    NotFound,

    #[error("Session store error: {0}")]
    Store(#[from] KvError),

    #[error("Failed to encode session record: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Failed to decode session record: {0}")]
    Deserialization(#[source] serde_json::Error),
}
