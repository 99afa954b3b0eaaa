//! HTTP handlers for item-service.

pub mod admin;
pub mod health;
pub mod info;
pub mod items;

pub use admin::reset_items;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use info::service_info;
pub use items::{create_item, delete_item, get_item, list_items, update_item};
