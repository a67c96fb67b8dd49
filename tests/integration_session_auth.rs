mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use axum::{Router, middleware};
use chrono::{TimeDelta, Utc};
use common::{
    FakeStore, body_string, form_request, lazy_pool, request_with_session, session_set_cookie,
    test_state,
};
use shipboard::middleware::auth::{AuthSession, LOGIN_PATH, require_auth};
use shipboard::router::init_router;
use shipboard::state::AppState;
use shipboard_core::INTERNAL_ERROR_MESSAGE;
use shipboard_kv::MemoryStore;
use shipboard_session::{SessionError, SessionRecord};
use tower::ServiceExt;

/// A protected route that needs nothing but the session, so no database is
/// involved.
fn whoami_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/whoami/",
            get(|session: AuthSession| async move { session.user_id.to_string() }),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

async fn live_session(state: &AppState, user_id: i32) -> String {
    let record = SessionRecord::new(user_id, "a@b.com", Utc::now());
    state.sessions.create_session(&record).await.unwrap()
}

async fn stale_session(state: &AppState, user_id: i32) -> String {
    let record = SessionRecord::new(user_id, "a@b.com", Utc::now() - TimeDelta::hours(25));
    state.sessions.create_session(&record).await.unwrap()
}

fn assert_redirects_to_login(response: &axum::http::Response<Body>) {
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], LOGIN_PATH);
}

#[tokio::test]
async fn test_valid_session_reaches_handler_with_user_id() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = live_session(&state, 42).await;

    let response = whoami_app(state)
        .oneshot(request_with_session("GET", "/whoami/", &session_id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "42");
}

#[tokio::test]
async fn test_missing_cookie_redirects_without_store_lookup() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());

    let response = whoami_app(state)
        .oneshot(Request::get("/whoami/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert_eq!(store.gets(), 0);
}

#[tokio::test]
async fn test_empty_cookie_redirects_without_store_lookup() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());

    let response = whoami_app(state)
        .oneshot(request_with_session("GET", "/whoami/", ""))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert_eq!(store.gets(), 0);
}

#[tokio::test]
async fn test_unknown_session_redirects() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());

    let response = whoami_app(state)
        .oneshot(request_with_session(
            "GET",
            "/whoami/",
            "00000000-0000-4000-8000-000000000000",
        ))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert_eq!(store.gets(), 1);
}

#[tokio::test]
async fn test_store_failure_redirects() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = live_session(&state, 1).await;
    store.fail_gets();

    let response = whoami_app(state)
        .oneshot(request_with_session("GET", "/whoami/", &session_id))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
}

#[tokio::test]
async fn test_expired_session_is_deleted_and_redirected() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = stale_session(&state, 1).await;

    let response = whoami_app(state.clone())
        .oneshot(request_with_session("GET", "/whoami/", &session_id))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert_eq!(store.deletes(), 1);
    assert!(matches!(
        state.sessions.get(&session_id).await,
        Err(SessionError::NotFound)
    ));
}

#[tokio::test]
async fn test_expired_session_is_rejected_even_if_delete_fails() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = stale_session(&state, 1).await;
    store.fail_deletes();

    let response = whoami_app(state.clone())
        .oneshot(request_with_session("GET", "/whoami/", &session_id))
        .await
        .unwrap();

    assert_redirects_to_login(&response);
    assert_eq!(store.deletes(), 1);
    // Still present, and still rejected on the next request.
    assert!(state.sessions.get(&session_id).await.is_ok());

    let replay = whoami_app(state)
        .oneshot(request_with_session("GET", "/whoami/", &session_id))
        .await
        .unwrap();
    assert_redirects_to_login(&replay);
}

#[tokio::test]
async fn test_protected_pages_redirect_without_session() {
    let state = test_state(lazy_pool(), FakeStore::new());
    let app = init_router(state);

    for (method, uri) in [
        ("GET", "/clip/"),
        ("POST", "/clip/"),
        ("GET", "/clip/current/"),
        ("DELETE", "/logout/"),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_redirects_to_login(&response);
    }
}

#[tokio::test]
async fn test_logout_deletes_session_and_clears_cookie() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = live_session(&state, 7).await;
    let app = init_router(state.clone());

    let response = app
        .clone()
        .oneshot(request_with_session("DELETE", "/logout/", &session_id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookie = session_set_cookie(&response).expect("cookie should be cleared");
    assert!(set_cookie.starts_with("session_id=;"));
    assert!(set_cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Path=/"));

    assert!(matches!(
        state.sessions.get(&session_id).await,
        Err(SessionError::NotFound)
    ));

    // Replaying the old cookie no longer works.
    let replay = app
        .oneshot(request_with_session("DELETE", "/logout/", &session_id))
        .await
        .unwrap();
    assert_redirects_to_login(&replay);
}

#[tokio::test]
async fn test_logout_store_failure_is_500_and_keeps_cookie() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());
    let session_id = live_session(&state, 7).await;
    store.fail_deletes();

    let response = init_router(state)
        .oneshot(request_with_session("DELETE", "/logout/", &session_id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(session_set_cookie(&response).is_none());

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_login_rejects_malformed_email_before_any_lookup() {
    let store = FakeStore::new();
    let state = test_state(lazy_pool(), store.clone());

    let response = init_router(state)
        .oneshot(form_request(
            "POST",
            "/login/",
            "email=not-an-email&password=correct".to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(session_set_cookie(&response).is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_login_missing_password_is_bad_request() {
    let state = test_state(lazy_pool(), FakeStore::new());

    let response = init_router(state)
        .oneshot(form_request("POST", "/login/", "email=a%40b.com".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_public_pages_render() {
    let state = test_state(lazy_pool(), FakeStore::new());
    let app = init_router(state);

    for uri in ["/login/", "/register/"] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let state = test_state(lazy_pool(), FakeStore::new());

    let response = init_router(state)
        .oneshot(Request::get("/static/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let state = test_state(lazy_pool(), Arc::new(MemoryStore::new()));

    let response = init_router(state)
        .oneshot(Request::get("/nope/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
