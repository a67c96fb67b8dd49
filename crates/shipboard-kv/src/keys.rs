//! Key namespacing.
//!
//! Sessions and clipboard values share one backend; every key space gets its
//! own fixed prefix so the two can never collide.

use uuid::Uuid;

fn build_key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}

/// Keys for session records.
pub mod sessions {
    use super::*;

    pub const PREFIX: &str = "__session_id__";

    /// Key for a session by its opaque identifier.
    pub fn by_id(session_id: &str) -> String {
        build_key(PREFIX, session_id)
    }
}

/// Keys for the per-user clipboard value.
pub mod clipboard {
    use super::*;

    pub const PREFIX: &str = "__clip__";

    /// Key for a user's clipboard, addressed by the account's public uid.
    pub fn by_user(uid: Uuid) -> String {
        build_key(PREFIX, &uid.to_string())
    }
}
