use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, register_user};

/// Public routes: the only ones reachable without a session token.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/registro", post(register_user))
        .route("/login", post(login_user))
}
