//! # Shipboard Core
//!
//! Foundational types shared by every Shipboard crate:
//!
//! - [`errors`]: the HTTP-aware application error type
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use shipboard_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse")?;
//! if !verify_password("correct horse", &hash)? {
//!     return Err(AppError::unauthorized(anyhow::anyhow!("Invalid email or password")));
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::{AppError, INTERNAL_ERROR_MESSAGE};
pub use password::{hash_password, verify_password};
