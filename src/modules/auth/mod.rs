//! Login, logout and account registration.

pub mod controller;
pub mod router;
pub mod service;
