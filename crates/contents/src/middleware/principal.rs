//! Principal resolution.
//!
//! Looks up the user named by the `X-User` header and stores their
//! [`UserContext`] in the request extensions. Requests without the header,
//! or naming an unknown user, pass through with no principal.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::state::AppState;

/// Header carrying the authenticated user name, set by the fronting proxy.
pub const USER_HEADER: &str = "x-user";

/// Middleware to attach the current principal to the request.
pub async fn resolve_principal(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let name = request
        .headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    if let Some(name) = name {
        match state.find_user(&name) {
            Some(user) => {
                request.extensions_mut().insert(user.context());
            }
            None => debug!(user = %name, "unknown user, continuing without principal"),
        }
    }

    next.run(request).await
}
