//! HTTP route handlers.

pub mod filter_box;
pub mod health;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::{negotiate_language, resolve_principal};
use crate::state::AppState;

/// Build the application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(filter_box::router())
        .merge(health::router())
        .fallback(|| async { AppError::NotFound })
        // Last added = first executed: trace → principal → language → routes
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            negotiate_language,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            resolve_principal,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
