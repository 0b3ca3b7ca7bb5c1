use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Catalog product as stored in `products.json`.
///
/// Only the fields the endpoints reason about are typed. Everything else in
/// the record (`sizes`, `description`, ratings, brand...) rides along in
/// `extra` so a product is echoed back exactly as the file holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub color: String,
    /// Price in rupees, kept in its stored numeric form (`1799` stays `1799`).
    pub price: Number,
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Case-insensitive category equality.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// True when `needle` (already lowercased) occurs in the name, category or color.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.color.to_lowercase().contains(needle)
    }
}


// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub category: Option<String>,
    pub user_input: Option<String>,
    pub user_id: Option<String>,
}

impl RecommendationRequest {
    pub fn user_id(&self) -> &str {
        super::user_id_or_default(&self.user_id)
    }
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Product>,
    pub message: String,
}
