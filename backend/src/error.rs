use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// Missing conditional field or unsupported enum value.
    #[error("{0}")]
    BadRequest(String),

    /// Simulated gateway decline from the mock checkout.
    #[error("Payment Failed. Please try again.")]
    PaymentFailed,

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            Self::PaymentFailed => (
                StatusCode::BAD_REQUEST,
                json!({
                    "status": "failed",
                    "message": self.to_string(),
                    "order_id": null,
                }),
            ),
            Self::Catalog(err) => {
                tracing::error!(error = %err, "Catalog unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Catalog data unavailable"),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
