//! Session cookie configuration.
//!
//! The cookie name, path, `HttpOnly` and `SameSite=Strict` attributes and the
//! 24 hour lifetime are fixed. Only the `Secure` flag can be relaxed, for
//! local development over plain HTTP.
//!
//! # Environment Variables
//!
//! - `SESSION_COOKIE_SECURE`: `false` or `0` to drop the `Secure` attribute
//!   (default: `true`)

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_secure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_secure() {
        assert!(SessionConfig::default().cookie_secure);
    }
}
