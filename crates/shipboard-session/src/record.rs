//! The persisted session record.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of every session, both for `expires_at` and the backend TTL.
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// What the server remembers about one login.
///
/// The session identifier is not part of the record: it is the storage key
/// suffix, generated by [`SessionStore::create_session`](crate::SessionStore::create_session).
///
/// Stored as JSON with the field names below; timestamps keep full
/// sub-second precision so a record reads back exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Owning account (`users.id`).
    pub user_id: i32,
    /// Account email at login time.
    pub email: String,
    pub login_time: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Builds a record for a login that happened at `login_time`.
    /// `expires_at` is always `login_time + SESSION_TTL`.
    pub fn new(user_id: i32, email: impl Into<String>, login_time: DateTime<Utc>) -> Self {
        Self {
            user_id,
            email: email.into(),
            login_time,
            expires_at: login_time + session_ttl(),
        }
    }

    /// A session is invalid from `expires_at` onwards.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

fn session_ttl() -> TimeDelta {
    TimeDelta::seconds(SESSION_TTL.as_secs() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_expiry_one_day_after_login() {
        let login_time = Utc::now();
        let record = SessionRecord::new(7, "a@b.com", login_time);

        assert_eq!(record.user_id, 7);
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.login_time, login_time);
        assert_eq!(record.expires_at - record.login_time, TimeDelta::hours(24));
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let login_time = Utc::now();
        let record = SessionRecord::new(1, "a@b.com", login_time);

        assert!(!record.is_expired_at(login_time));
        assert!(!record.is_expired_at(record.expires_at - TimeDelta::milliseconds(1)));
        assert!(record.is_expired_at(record.expires_at));
        assert!(record.is_expired_at(record.expires_at + TimeDelta::seconds(1)));
    }

    #[test]
    fn test_json_field_names() {
        let record = SessionRecord::new(3, "c@d.com", Utc::now());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["user_id"], 3);
        assert_eq!(value["email"], "c@d.com");
        assert!(value["login_time"].is_string());
        assert!(value["expires_at"].is_string());
    }

    #[test]
    fn test_timestamps_survive_encoding_with_sub_second_precision() {
        let login_time = DateTime::parse_from_rfc3339("2024-03-09T17:45:12.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = SessionRecord::new(9, "e@f.com", login_time);

        let json = serde_json::to_string(&record).unwrap();
        let decoded: SessionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
        assert_eq!(decoded.login_time.timestamp_subsec_nanos(), 123_456_789);
    }
}
