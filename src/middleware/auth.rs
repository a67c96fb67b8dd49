use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, Expiration, SameSite};
use chrono::{DateTime, Utc};
use shipboard_observability::track_session_expired;
use shipboard_session::SessionError;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_id";
pub const LOGIN_PATH: &str = "/login/";

/// Identity of the caller on a protected route.
///
/// Only [`require_auth`] inserts this value, so a handler taking
/// `AuthSession` is unreachable for unauthenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: i32,
    pub session_id: String,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .ok_or_else(|| Redirect::temporary(LOGIN_PATH))
    }
}

fn redirect_to_login() -> Response {
    Redirect::temporary(LOGIN_PATH).into_response()
}

/// Rejects the request with a 307 to `/login/` unless it carries the cookie of
/// a live session.
///
/// A session whose `expires_at` has passed is deleted on a best-effort basis
/// and rejected whether or not the delete succeeds.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(session_id) = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
    else {
        debug!(path = %req.uri().path(), "No session cookie");
        return redirect_to_login();
    };

    let record = match state.sessions.get(&session_id).await {
        Ok(record) => record,
        Err(SessionError::NotFound) => {
            debug!("Unknown session");
            return redirect_to_login();
        }
        Err(e) => {
            warn!(error = %e, "Session lookup failed");
            return redirect_to_login();
        }
    };

    if record.is_expired_at(Utc::now()) {
        if let Err(e) = state.sessions.expire(&session_id).await {
            warn!(error = %e, user_id = record.user_id, "Failed to delete expired session");
        }
        track_session_expired("expired");
        debug!(user_id = record.user_id, "Session expired");
        return redirect_to_login();
    }

    req.extensions_mut().insert(AuthSession {
        user_id: record.user_id,
        session_id,
    });

    next.run(req).await
}

fn base_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .build()
}

/// The cookie handed out at login. It expires together with the session.
pub fn session_cookie(session_id: String, expires_at: DateTime<Utc>, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(session_id, secure);
    cookie.set_expires(
        OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
            .map(Expiration::DateTime)
            .unwrap_or(Expiration::Session),
    );
    cookie
}

/// Overwrites the session cookie with an empty value that expired at the Unix
/// epoch.
pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), secure);
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie
}
