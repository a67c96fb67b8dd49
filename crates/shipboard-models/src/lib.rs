//! # Shipboard Models
//!
//! Database entities and form DTOs.
//!
//! # Modules
//!
//! - [`auth`]: login and registration forms
//! - [`clip`]: clipboard broadcast form
//! - [`users`]: account rows

pub mod auth;
pub mod clip;
pub mod users;

pub use auth::{LoginRequest, RegisterRequest};
pub use clip::BroadcastRequest;
pub use users::{User, UserCredentials};
