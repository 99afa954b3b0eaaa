use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::{Item, ItemChanges, NewItem};

/// Persistence for the `items` relation.
///
/// Every method is a single round trip to the backing store; implementations
/// keep no per-caller state, so any replica can serve any request.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items ordered by id.
    async fn list_items(&self) -> Result<Vec<Item>, AppError>;

    async fn get_item(&self, id: i32) -> Result<Option<Item>, AppError>;

    /// Insert and return the row with its assigned id.
    async fn create_item(&self, new_item: NewItem) -> Result<Item, AppError>;

    /// Returns `None` when no item has this id.
    async fn update_item(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>, AppError>;

    /// Returns `false` when no item has this id.
    async fn delete_item(&self, id: i32) -> Result<bool, AppError>;

    /// Remove every item and restart id assignment.
    async fn reset(&self) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
