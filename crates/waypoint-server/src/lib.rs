//! Waypoint Server — the request router over the authenticated
//! data-access core. Library exports for integration testing.

pub mod api;
pub mod clients;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router over a constructed state.
pub fn app(state: Arc<AppState>) -> Router {
    api::router()
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
