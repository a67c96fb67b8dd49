//! Account rows.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account, without its password hash.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    /// Public identifier; also addresses the user's clipboard key.
    pub uid: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// The columns needed to check a login.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}
