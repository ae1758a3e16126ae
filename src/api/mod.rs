//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// The route table is the complete HTTP surface: each path registers its
/// handled methods explicitly, and the method router answers 405 for
/// everything else on a routed path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest(
            "/v1",
            Router::new().route("/products", get(handlers::list_products)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convenience helper wrapping a catalog directly
pub fn create_catalog_router(catalog: Arc<Catalog>) -> Router {
    create_router(AppState::new(catalog))
}
