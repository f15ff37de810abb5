//! Shared application router builder
//!
//! Lives in the library so the production binary and the integration tests
//! serve the exact same middleware stack.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    // The gateway fronts arbitrary tooling; any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::run::router())
        .merge(routes::read::router())
        // Structured request/response tracing.
        .layer(TraceLayer::new_for_http())
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}
