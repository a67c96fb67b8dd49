pub mod auth;
pub mod clip;
