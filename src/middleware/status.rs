use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use campus_core::ErrorKind;

use crate::state::AppState;

/// Sets the status of every error response from the configured [`campus_core::StatusPolicy`].
///
/// Error responses carry their [`ErrorKind`] in the response extensions;
/// success responses pass through untouched.
pub async fn apply_status_policy(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    if let Some(kind) = response.extensions().get::<ErrorKind>().copied() {
        *response.status_mut() = kind.status(state.compat.status_policy);
    }

    response
}
