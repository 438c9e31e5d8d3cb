//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - `hunting_guide_write_total` / `hunting_guide_write_duration_seconds`
//!   by operation and result
//! - `app_booking_create_total` / `app_booking_create_duration_seconds` by result
//! - HTTP request counts and latency by method, matched route and status

use std::time::Duration;

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::application::metrics::{
    BookingCreateResult, BookingMetrics, GuideMetrics, GuideWriteOperation, GuideWriteResult,
};

/// 10ms .. 5s
const WRITE_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0];

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Guide write attempts by operation and result
pub static GUIDE_WRITE_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "guide_write_total",
            "Total number of guide write attempts grouped by operation and result.",
        )
        .namespace("hunting"),
        &["operation", "result"],
    )
    .expect("Failed to create GUIDE_WRITE_TOTAL metric")
});

/// Guide write duration by operation and result
pub static GUIDE_WRITE_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "guide_write_duration_seconds",
            "Duration of guide write operations grouped by operation and result.",
        )
        .namespace("hunting")
        .buckets(WRITE_BUCKETS.to_vec()),
        &["operation", "result"],
    )
    .expect("Failed to create GUIDE_WRITE_DURATION_SECONDS metric")
});

/// Booking create attempts by result
pub static BOOKING_CREATE_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "booking_create_total",
            "Total number of hunting booking create attempts grouped by result.",
        )
        .namespace("app"),
        &["result"],
    )
    .expect("Failed to create BOOKING_CREATE_TOTAL metric")
});

/// Booking create duration by result
pub static BOOKING_CREATE_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "booking_create_duration_seconds",
            "Duration of hunting booking create attempts grouped by result.",
        )
        .namespace("app")
        .buckets(WRITE_BUCKETS.to_vec()),
        &["result"],
    )
    .expect("Failed to create BOOKING_CREATE_DURATION_SECONDS metric")
});

/// HTTP request counter - tracks total requests by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace("hunting"),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// HTTP request latency histogram - tracks request duration in seconds
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];
    HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        )
        .namespace("hunting")
        .buckets(buckets),
        &["method", "path"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(GUIDE_WRITE_TOTAL.clone()))
        .expect("Failed to register GUIDE_WRITE_TOTAL");
    registry
        .register(Box::new(GUIDE_WRITE_DURATION_SECONDS.clone()))
        .expect("Failed to register GUIDE_WRITE_DURATION_SECONDS");
    registry
        .register(Box::new(BOOKING_CREATE_TOTAL.clone()))
        .expect("Failed to register BOOKING_CREATE_TOTAL");
    registry
        .register(Box::new(BOOKING_CREATE_DURATION_SECONDS.clone()))
        .expect("Failed to register BOOKING_CREATE_DURATION_SECONDS");
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Helper to record HTTP request metrics
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

/// [`GuideMetrics`] backed by the global registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusGuideMetrics;

impl GuideMetrics for PrometheusGuideMetrics {
    fn observe_write(
        &self,
        operation: GuideWriteOperation,
        result: GuideWriteResult,
        duration: Duration,
    ) {
        let labels = [operation.as_str(), result.as_str()];
        GUIDE_WRITE_TOTAL.with_label_values(&labels).inc();
        GUIDE_WRITE_DURATION_SECONDS
            .with_label_values(&labels)
            .observe(duration.as_secs_f64());
    }
}

/// [`BookingMetrics`] backed by the global registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusBookingMetrics;

impl BookingMetrics for PrometheusBookingMetrics {
    fn observe_create(&self, result: BookingCreateResult, duration: Duration) {
        let labels = [result.as_str()];
        BOOKING_CREATE_TOTAL.with_label_values(&labels).inc();
        BOOKING_CREATE_DURATION_SECONDS
            .with_label_values(&labels)
            .observe(duration.as_secs_f64());
    }
}
