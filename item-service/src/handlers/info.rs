use axum::{extract::State, Json};

use crate::dtos::InfoResponse;
use crate::startup::AppState;

/// Report which instance served the request.
pub async fn service_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: format!("{} is running", state.config.service_name),
        service: state.config.service_name.clone(),
        hostname: state.identity.hostname().to_string(),
        version: state.config.service_version.clone(),
    })
}
