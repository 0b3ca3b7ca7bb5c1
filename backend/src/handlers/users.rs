use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let user = state
        .catalog
        .fetch_user_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!(user_id = %user.user_id, "Fetched user profile");

    Ok((StatusCode::OK, Json(serde_json::json!({ "user": user }))))
}
