//! Item-level metrics, exported through the service-core Prometheus recorder.

use std::time::Instant;

/// Times one store operation into `item_db_query_duration_seconds`.
pub struct QueryTimer {
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    pub fn observe_duration(self) {
        metrics::histogram!("item_db_query_duration_seconds", "operation" => self.operation)
            .record(self.start.elapsed().as_secs_f64());
    }
}

/// Record the outcome of an item operation (`created`, `updated`, `deleted`, `reset`).
pub fn record_item_operation(operation: &'static str) {
    metrics::counter!("item_operations_total", "operation" => operation).increment(1);
}

/// Record a failed store call.
pub fn record_error(operation: &'static str) {
    metrics::counter!("item_db_errors_total", "operation" => operation).increment(1);
}
