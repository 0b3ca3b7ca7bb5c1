pub mod chat;
pub mod checkout;
pub mod fulfillment;
pub mod inventory;
pub mod loyalty;
pub mod products;
pub mod recommend;
pub mod tryon;
pub mod users;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub async fn root() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "message": "Setu AI Backend API", "status": "running" })))
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "setu-backend" })))
}
