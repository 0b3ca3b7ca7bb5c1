use serde::{Deserialize, Serialize};

// ── Checkout ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub product_id: i64,
    pub size: String,
    pub payment_method: String,
    pub upi_id: Option<String>,
    pub card_number: Option<String>,
    pub user_id: Option<String>,
}

impl CheckoutRequest {
    pub fn user_id(&self) -> &str {
        super::user_id_or_default(&self.user_id)
    }
}

/// Successful mock payment. Declines never produce one of these.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub status: String,
    pub message: String,
    pub order_id: String,
    pub product: String,
    pub size: String,
    /// Echoes the catalog price in its stored numeric form.
    pub amount: serde_json::Number,
    pub payment_method: String,
    pub timestamp: String,
}

// ── Fulfillment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentType {
    HomeDelivery,
    StorePickup,
}

impl FulfillmentType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "home_delivery" => Some(Self::HomeDelivery),
            "store_pickup" => Some(Self::StorePickup),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FulfillmentRequest {
    pub order_id: String,
    /// Kept as text so unknown values surface as a 400 from the handler.
    pub fulfillment_type: String,
    pub address: Option<String>,
    pub store_location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FulfillmentResponse {
    Delivery {
        fulfillment_type: FulfillmentType,
        order_id: String,
        address: String,
        estimated_delivery_days: u32,
        status: String,
        message: String,
    },
    Pickup {
        fulfillment_type: FulfillmentType,
        order_id: String,
        store_location: String,
        pickup_date: u32,
        status: String,
        message: String,
    },
}
