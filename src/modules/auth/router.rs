use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

use super::controller::{login_page, login_user, logout_user, register_page, register_user};

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout/", delete(logout_user))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
        .route("/login/", get(login_page).post(login_user))
        .route("/register/", get(register_page).post(register_user))
}
