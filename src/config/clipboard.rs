use std::env;
use std::time::Duration;

/// # Environment Variables
///
/// - `CLIPBOARD_TTL_SECONDS`: lifetime of a broadcast value. Unset, zero or
///   unparsable means the value is kept until overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardConfig {
    pub ttl: Option<Duration>,
}

impl ClipboardConfig {
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("CLIPBOARD_TTL_SECONDS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}
