use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use shipboard_core::AppError;
use shipboard_models::{BroadcastRequest, User};
use shipboard_observability::track_session_expired;
use tracing::{instrument, warn};

use super::service::ClipService;
use crate::middleware::auth::{AuthSession, LOGIN_PATH, expired_session_cookie};
use crate::modules::auth::controller::HX_REDIRECT;
use crate::state::AppState;
use crate::templates;
use crate::validator::ValidatedForm;

/// Ends a session whose account no longer exists and sends the browser back
/// to the login page.
async fn sign_out_orphan(state: &AppState, session: &AuthSession, jar: CookieJar) -> Response {
    warn!(user_id = session.user_id, "Session belongs to a deleted user");

    if let Err(e) = state.sessions.expire(&session.session_id).await {
        warn!(error = %e, "Failed to delete orphaned session");
    }
    track_session_expired("orphaned");

    (
        jar.add(expired_session_cookie(state.session_config.cookie_secure)),
        [(HX_REDIRECT, LOGIN_PATH)],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}

async fn owner(state: &AppState, session: &AuthSession) -> Result<Option<User>, AppError> {
    ClipService::find_owner(&state.db, session.user_id).await
}

#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn clip_page(
    State(state): State<AppState>,
    session: AuthSession,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(user) = owner(&state, &session).await? else {
        return Ok(sign_out_orphan(&state, &session, jar).await);
    };

    let content = ClipService::current(state.kv.as_ref(), user.uid).await?;
    let page: Html<String> = state.templates.render(
        templates::CLIP,
        &json!({ "name": user.name, "content": content }),
    )?;

    Ok(page.into_response())
}

/// Stores the posted `content` as the caller's clipboard value.
#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn broadcast(
    State(state): State<AppState>,
    session: AuthSession,
    jar: CookieJar,
    ValidatedForm(dto): ValidatedForm<BroadcastRequest>,
) -> Result<Response, AppError> {
    let Some(user) = owner(&state, &session).await? else {
        return Ok(sign_out_orphan(&state, &session, jar).await);
    };

    ClipService::broadcast(
        state.kv.as_ref(),
        user.uid,
        &dto.content,
        state.clipboard_config.ttl,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// 200 with the value as `text/plain`, or 204 when nothing has been
/// broadcast yet.
#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn current_clip(
    State(state): State<AppState>,
    session: AuthSession,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(user) = owner(&state, &session).await? else {
        return Ok(sign_out_orphan(&state, &session, jar).await);
    };

    let response = match ClipService::current(state.kv.as_ref(), user.uid).await? {
        Some(content) => content.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}
