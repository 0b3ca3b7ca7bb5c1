use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct VirtualTryOnRequest {
    pub product_id: i64,
    /// Accepted for storefront compatibility; the mock never reads it.
    pub model_image_url: Option<String>,
    pub user_image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VirtualTryOnResponse {
    pub product_id: i64,
    pub product_name: String,
    pub tryon_status: String,
    pub preview_url: String,
    pub user_image_url: String,
    pub message: String,
    pub fit_rating: String,
    pub recommendation: String,
}
