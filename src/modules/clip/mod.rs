//! The per-user clipboard: one text value, readable from every device the
//! user is logged in on.

pub mod controller;
pub mod router;
pub mod service;
