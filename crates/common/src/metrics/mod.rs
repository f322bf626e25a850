//! Metrics and observability utilities
//!
//! Prometheus metrics with standardized naming conventions.
//! Without an installed recorder every helper is a no-op.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all Readlist metrics
pub const METRICS_PREFIX: &str = "readlist";

/// Histogram buckets for request and query latency (in seconds)
pub const LATENCY_BUCKETS: &[f64] = &[
    0.001,  // 1ms
    0.005,  // 5ms
    0.010,  // 10ms
    0.025,  // 25ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.250,  // 250ms
    0.500,  // 500ms
    1.000,  // 1s
    2.500,  // 2.5s
    5.000,  // 5s
];

/// Register all metric descriptions
pub fn register_metrics() {
    // Request metrics
    describe_counter!(
        format!("{}_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of HTTP requests"
    );

    describe_histogram!(
        format!("{}_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "HTTP request latency in seconds"
    );

    // Article metrics
    describe_counter!(
        format!("{}_article_operations_total", METRICS_PREFIX),
        Unit::Count,
        "Article service operations by outcome"
    );

    describe_histogram!(
        format!("{}_db_query_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Database statement latency in seconds"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record request metrics
pub struct RequestMetrics {
    start: Instant,
    endpoint: String,
    method: String,
}

impl RequestMetrics {
    /// Start tracking a request
    pub fn start(method: &str, endpoint: &str) -> Self {
        Self {
            start: Instant::now(),
            endpoint: endpoint.to_string(),
            method: method.to_string(),
        }
    }

    /// Record request completion
    pub fn finish(self, status: u16) {
        let duration = self.start.elapsed().as_secs_f64();

        counter!(
            format!("{}_requests_total", METRICS_PREFIX),
            "method" => self.method.clone(),
            "endpoint" => self.endpoint.clone(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            format!("{}_request_duration_seconds", METRICS_PREFIX),
            "method" => self.method,
            "endpoint" => self.endpoint
        )
        .record(duration);
    }
}

/// Times one article operation against the store
pub struct OperationMetrics {
    start: Instant,
    operation: &'static str,
}

impl OperationMetrics {
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Record the store round-trip and its outcome
    pub fn finish(self, success: bool) {
        let outcome = if success { "success" } else { "error" };

        counter!(
            format!("{}_article_operations_total", METRICS_PREFIX),
            "operation" => self.operation,
            "outcome" => outcome
        )
        .increment(1);

        histogram!(
            format!("{}_db_query_duration_seconds", METRICS_PREFIX),
            "operation" => self.operation
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}

/// Count an operation rejected before it reached the store
pub fn record_rejected(operation: &'static str) {
    counter!(
        format!("{}_article_operations_total", METRICS_PREFIX),
        "operation" => operation,
        "outcome" => "rejected"
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_buckets() {
        let mut prev = 0.0;
        for &bucket in LATENCY_BUCKETS {
            assert!(bucket > prev);
            prev = bucket;
        }
    }

    #[test]
    fn test_helpers_without_recorder() {
        let request = RequestMetrics::start("GET", "/api/article.getAll");
        request.finish(200);

        OperationMetrics::start("create").finish(false);
        record_rejected("create");
    }
}
