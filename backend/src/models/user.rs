use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub categories: Vec<String>,
    /// Any other preference keys the profile file carries.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub loyalty_points: u64,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn prefers(&self, category: &str) -> bool {
        self.preferences.categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Deserialize)]
pub struct LoyaltyRequest {
    pub user_id: String,
    pub order_amount: f64,
}

/// Discount breakdown. The no-profile shape carries a zero `discount` and the
/// untouched order amount.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoyaltyResponse {
    NoProfile {
        loyalty_points: u64,
        discount: f64,
        discount_amount: f64,
        final_amount: f64,
        message: String,
    },
    Applied {
        loyalty_points: u64,
        discount_points_used: u64,
        discount_amount: f64,
        final_amount: f64,
        message: String,
    },
}
