use axum::{Router, middleware, routing::get};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{broadcast, clip_page, current_clip};

pub fn init_clip_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/clip/", get(clip_page).post(broadcast))
        .route("/clip/current/", get(current_clip))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
