//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::serializer::{project_all, ProductView};

/// Health check with row counts
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let stats = state
        .catalog
        .stats()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        categories: stats.categories,
        products: stats.products,
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub categories: usize,
    pub products: usize,
}

/// List the full catalog.
///
/// Reads every product row fresh from the store, projects each through the
/// serializer and returns the array. No parameters, no pagination, no
/// mutation; a store fault surfaces as an opaque 500.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, (StatusCode, String)> {
    let rows = state
        .catalog
        .list_with_categories()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(project_all(&rows)))
}
