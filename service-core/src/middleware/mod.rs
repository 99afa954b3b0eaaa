pub mod instance;
pub mod metrics;
pub mod tracing;
