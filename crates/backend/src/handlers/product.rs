use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::product::aggregate::{Product, ProductSearchQuery};

use super::status_for;
use crate::domain::product;
use crate::state::AppState;

/// GET /api/products
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, StatusCode> {
    product::service::list_all(state.source.as_ref())
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    if id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    product::service::get_by_id(state.source.as_ref(), &id)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

/// GET /api/search?product=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<ProductSearchQuery>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    product::service::search(state.source.as_ref(), &query)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}
