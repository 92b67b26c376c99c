//! HTTP route handlers.
//!
//! Each sub-module corresponds to an API endpoint group. The joke endpoints
//! authenticate inside the core processor (the `token` header), so the router
//! carries no auth middleware; `/api/health` is open by design.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod joke;

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/joke", get(joke::joke))
        .route("/api/joke/{rename}", get(joke::joke_renamed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
