use axum::extract::{FromRequestParts, Path};
use serde::Deserialize;
use service_core::error::AppError;

/// `{id}` path segment. Non-integer ids are rejected with a JSON 400 instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ItemId(pub i32);
