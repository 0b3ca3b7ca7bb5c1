use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: i64,
    pub online_stock: u32,
    /// Units per store, keyed by store identifier, in file order.
    #[serde(default)]
    pub store_stock: IndexMap<String, u32>,
}

impl InventoryRecord {
    pub fn is_available(&self) -> bool {
        self.online_stock > 0 || self.store_stock.values().any(|&units| units > 0)
    }
}

#[derive(Debug, Deserialize)]
pub struct InventoryRequest {
    pub product_id: i64,
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub product_id: i64,
    pub product_name: String,
    pub online_stock: u32,
    pub store_stock: IndexMap<String, u32>,
    pub available: bool,
    pub message: String,
}
