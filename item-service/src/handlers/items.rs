//! Item CRUD handlers. Each one is a single store call.

use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

use crate::dtos::{CreateItemRequest, UpdateItemRequest};
use crate::models::Item;
use crate::services::metrics::record_item_operation;
use crate::startup::AppState;
use crate::utils::{ItemId, ValidatedJson};

fn item_not_found(id: i32) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Item {} not found", id))
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.store.list_items().await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, AppError> {
    let item = state
        .store
        .get_item(id)
        .await?
        .ok_or_else(|| item_not_found(id))?;

    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = state.store.create_item(payload.into()).await?;

    record_item_operation("created");
    tracing::info!(item_id = item.id, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidatedJson(payload): ValidatedJson<UpdateItemRequest>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .store
        .update_item(id, payload.into())
        .await?
        .ok_or_else(|| item_not_found(id))?;

    record_item_operation("updated");
    tracing::info!(item_id = id, "Item updated");

    Ok(Json(item))
}

pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_item(id).await? {
        return Err(item_not_found(id));
    }

    record_item_operation("deleted");
    tracing::info!(item_id = id, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}
