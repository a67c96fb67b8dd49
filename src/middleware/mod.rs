//! Middleware and extractors for request processing.
//!
//! # Modules
//!
//! - [`auth`]: session cookie authentication
//!
//! # Authentication Flow
//!
//! 1. Browser sends the `session_id` cookie issued at login
//! 2. [`auth::require_auth`] resolves it through the session store and
//!    rejects missing, unknown or expired sessions with a redirect to `/login/`
//! 3. On success it stores an [`auth::AuthSession`] in the request extensions
//! 4. Handlers take `AuthSession` as an extractor
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthSession;
//!
//! async fn whoami(session: AuthSession) -> String {
//!     session.user_id.to_string()
//! }
//! ```

pub mod auth;
