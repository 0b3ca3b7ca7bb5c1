use axum::Json;
use chrono::{Datelike, Local};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{FulfillmentRequest, FulfillmentResponse, FulfillmentType},
};

fn required<'a>(field: &'a Option<String>, message: &str) -> AppResult<&'a str> {
    field
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}

/// Confirm delivery or pickup for an order. Lead times derive from the
/// calendar day, not from the order.
///
/// The pickup message always says "1-3 days" while `pickup_date` carries the
/// computed day; both are sent as-is.
pub fn plan_fulfillment(request: &FulfillmentRequest, day_of_month: u32) -> AppResult<FulfillmentResponse> {
    let kind = FulfillmentType::parse(&request.fulfillment_type)
        .ok_or_else(|| AppError::BadRequest("Invalid fulfillment type".to_string()))?;

    match kind {
        FulfillmentType::HomeDelivery => {
            let address = required(&request.address, "Address required for home delivery")?;
            let days = day_of_month % 7 + 2;
            Ok(FulfillmentResponse::Delivery {
                fulfillment_type: kind,
                order_id: request.order_id.clone(),
                address: address.to_string(),
                estimated_delivery_days: days,
                status: "confirmed".to_string(),
                message: format!("Order will be delivered to your address in {} days", days),
            })
        }
        FulfillmentType::StorePickup => {
            let store = required(&request.store_location, "Store location required for pickup")?;
            Ok(FulfillmentResponse::Pickup {
                fulfillment_type: kind,
                order_id: request.order_id.clone(),
                store_location: store.to_string(),
                pickup_date: day_of_month % 3 + 1,
                status: "confirmed".to_string(),
                message: format!("Order ready for pickup at {} in 1-3 days", store),
            })
        }
    }
}

// ── POST /fulfillment ────────────────────────────────────────────────────────

pub async fn process_fulfillment(
    Json(payload): Json<FulfillmentRequest>,
) -> AppResult<Json<FulfillmentResponse>> {
    let response = plan_fulfillment(&payload, Local::now().day())?;

    info!(
        order_id = %payload.order_id,
        fulfillment_type = %payload.fulfillment_type,
        "Fulfillment confirmed"
    );

    Ok(Json(response))
}
