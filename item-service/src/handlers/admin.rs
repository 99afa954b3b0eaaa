use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::MessageResponse;
use crate::services::metrics::record_item_operation;
use crate::startup::AppState;

/// Drop every item and restart ids. Test harness convenience only.
pub async fn reset_items(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    state.store.reset().await?;
    record_item_operation("reset");

    tracing::warn!("All items removed by reset");

    Ok(Json(MessageResponse {
        message: "Table reset successfully".to_string(),
    }))
}
