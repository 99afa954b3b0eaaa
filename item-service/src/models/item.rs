use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Fields for an item that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemChanges {
    /// Apply to an in-memory copy the same way the SQL `COALESCE` update does.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
    }
}
