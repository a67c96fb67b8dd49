use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use shipboard_core::AppError;
use shipboard_models::{LoginRequest, RegisterRequest, User};
use tracing::instrument;

use super::service::AuthService;
use crate::middleware::auth::{AuthSession, expired_session_cookie, session_cookie};
use crate::state::AppState;
use crate::templates;
use crate::validator::ValidatedForm;

/// Tells htmx to navigate after a successful login.
pub const HX_REDIRECT: &str = "HX-Redirect";
pub const AFTER_LOGIN_PATH: &str = "/clip/";

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.templates.render(templates::LOGIN, &json!({}))
}

pub async fn register_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.templates.render(templates::REGISTER, &json!({}))
}

/// Starts a session and sets the `session_id` cookie.
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(dto): ValidatedForm<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (session_id, record) = AuthService::login(&state.db, &state.sessions, dto).await?;

    let cookie = session_cookie(
        session_id,
        record.expires_at,
        state.session_config.cookie_secure,
    );

    Ok((
        jar.add(cookie),
        [(HX_REDIRECT, AFTER_LOGIN_PATH)],
        StatusCode::OK,
    ))
}

/// Deletes the caller's session and clears the cookie. On failure the cookie
/// is left as it was.
#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn logout_user(
    State(state): State<AppState>,
    session: AuthSession,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    AuthService::logout(&state.sessions, &session.session_id).await?;

    Ok((
        jar.add(expired_session_cookie(state.session_config.cookie_secure)),
        StatusCode::NO_CONTENT,
    ))
}

#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedForm(dto): ValidatedForm<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = AuthService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
