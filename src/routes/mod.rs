//! Router assembly.

mod api;
mod common;
pub use api::{api_routes, ApiDoc};
pub use common::common_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// The full application: domain and operational routes with body limit and request tracing.
/// Oversized bodies fail inside the JSON extractor, so they get the same 400 as other bad input.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(api_routes())
        .merge(common_routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
