use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{InventoryRecord, InventoryRequest, InventoryResponse, Product},
    AppState,
};

/// Build the stock snapshot. A missing inventory record is reported before a
/// missing product.
pub fn stock_snapshot(
    product_id: i64,
    inventory: Option<InventoryRecord>,
    product: Option<Product>,
) -> AppResult<InventoryResponse> {
    let inventory =
        inventory.ok_or_else(|| AppError::NotFound("Product inventory not found".to_string()))?;
    let product = product.ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(InventoryResponse {
        product_id,
        available: inventory.is_available(),
        message: format!(
            "{} - Online: {} units available",
            product.name, inventory.online_stock
        ),
        product_name: product.name,
        online_stock: inventory.online_stock,
        store_stock: inventory.store_stock,
    })
}

// ── POST /inventory ──────────────────────────────────────────────────────────

pub async fn check_inventory(
    State(state): State<AppState>,
    Json(payload): Json<InventoryRequest>,
) -> AppResult<Json<InventoryResponse>> {
    let inventory = state.catalog.fetch_inventory_for(payload.product_id).await?;
    let product = state.catalog.fetch_product_by_id(payload.product_id).await?;

    let snapshot = stock_snapshot(payload.product_id, inventory, product)?;

    info!(
        product_id = payload.product_id,
        online = snapshot.online_stock,
        available = snapshot.available,
        "Checked inventory"
    );

    Ok(Json(snapshot))
}
