use axum::{Router, middleware};
use shipboard_observability::{logging_middleware, metrics_middleware};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::auth::router::init_auth_router;
use crate::modules::clip::router::init_clip_router;
use crate::state::AppState;

const STATIC_DIR: &str = "static";

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_auth_router(state.clone()))
        .merge(init_clip_router(state.clone()))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
