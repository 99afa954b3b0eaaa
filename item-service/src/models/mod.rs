//! Domain models for item-service.

pub mod item;

pub use item::{Item, ItemChanges, NewItem};
