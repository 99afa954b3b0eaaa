//! Process-local item store.
//!
//! Mirrors the PostgreSQL store's semantics (ids start at 1, never reused
//! until reset) but lives inside one process, so it cannot be shared by
//! replicas behind a load balancer. Used by tests and single-instance runs.

use async_trait::async_trait;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::{Item, ItemChanges, NewItem};
use crate::services::store::ItemStore;

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Item>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    table: Mutex<Table>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>, AppError> {
        self.table
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Item table mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.table()?.rows.values().cloned().collect())
    }

    async fn get_item(&self, id: i32) -> Result<Option<Item>, AppError> {
        Ok(self.table()?.rows.get(&id).cloned())
    }

    async fn create_item(&self, new_item: NewItem) -> Result<Item, AppError> {
        let mut table = self.table()?;
        let id = table.next_id;
        table.next_id = id.checked_add(1).ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("Item id sequence exhausted"))
        })?;

        let item = Item {
            id,
            name: new_item.name,
            description: new_item.description,
        };
        table.rows.insert(id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>, AppError> {
        let mut table = self.table()?;
        Ok(table.rows.get_mut(&id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn delete_item(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.table()?.rows.remove(&id).is_some())
    }

    async fn reset(&self) -> Result<(), AppError> {
        *self.table()? = Table::default();
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.table().map(|_| ())
    }
}
