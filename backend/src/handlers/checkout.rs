use axum::{extract::State, Json};
use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    models::{CheckoutRequest, OrderConfirmation, Product},
    random::RandomSource,
    AppState,
};

/// Draws at or below this value decline the payment.
pub const DECLINE_THRESHOLD: f64 = 0.1;

/// Simulated gateway: a single uniform draw decides the outcome.
pub fn process_payment(
    product: &Product,
    request: &CheckoutRequest,
    rng: &dyn RandomSource,
    now: NaiveDateTime,
) -> AppResult<OrderConfirmation> {
    if rng.unit() <= DECLINE_THRESHOLD {
        return Err(AppError::PaymentFailed);
    }

    Ok(OrderConfirmation {
        status: "success".to_string(),
        message: "Payment Successful!".to_string(),
        order_id: format!("ORD{}", rng.range_inclusive(100_000, 999_999)),
        product: product.name.clone(),
        size: request.size.clone(),
        amount: product.price.clone(),
        payment_method: request.payment_method.clone(),
        timestamp: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    })
}

// ── POST /checkout ───────────────────────────────────────────────────────────

pub async fn process_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<OrderConfirmation>> {
    let product = state
        .catalog
        .fetch_product_by_id(payload.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    match process_payment(&product, &payload, state.rng.as_ref(), Local::now().naive_local()) {
        Ok(order) => {
            info!(
                order_id = %order.order_id,
                product_id = product.id,
                user_id = payload.user_id(),
                payment_method = %order.payment_method,
                upi = payload.upi_id.is_some(),
                card = payload.card_number.is_some(),
                "Payment accepted"
            );
            Ok(Json(order))
        }
        Err(err) => {
            warn!(
                product_id = product.id,
                user_id = payload.user_id(),
                "Payment declined"
            );
            Err(err)
        }
    }
}
