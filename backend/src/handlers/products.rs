use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let products = state.catalog.fetch_all_products().await?;

    info!(count = products.len(), "Listed products");

    Ok((StatusCode::OK, Json(serde_json::json!({ "products": products }))))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let product = state
        .catalog
        .fetch_product_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    info!(id, "Fetched product");

    Ok((StatusCode::OK, Json(serde_json::json!({ "product": product }))))
}
