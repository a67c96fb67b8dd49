//! Login and registration forms.
//!
//! Both arrive as `application/x-www-form-urlencoded` bodies from the HTML
//! pages and are validated before any database or session work happens.

use serde::Deserialize;
use validator::Validate;

/// Form posted to `POST /login/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Form posted to `POST /register/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
