//! Services module for item-service.

pub mod database;
pub mod identity;
pub mod memory;
pub mod metrics;
pub mod store;

pub use database::Database;
pub use identity::InstanceIdentity;
pub use memory::InMemoryItemStore;
pub use store::ItemStore;
