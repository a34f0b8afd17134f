use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramTimer,
    HistogramVec, IntCounterVec, IntGauge, TextEncoder,
};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "kv_requests_total",
        "Total store operations handled, by operation",
        &["op"]
    )
    .expect("register requests_total")
});

pub static REQUEST_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "kv_request_errors_total",
        "Total store operations rejected, by error kind",
        &["kind"]
    )
    .expect("register request_errors_total")
});

pub static KEYS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("kv_keys", "Number of keys in the store after the last write")
        .expect("register keys")
});

pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "kv_request_duration_seconds",
        "Store operation duration in seconds",
        &["op"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("register request_duration")
});

/// Count one `op` and time it until the returned guard drops.
pub fn track(op: &str) -> HistogramTimer {
    REQUESTS_TOTAL.with_label_values(&[op]).inc();
    REQUEST_DURATION.with_label_values(&[op]).start_timer()
}

pub fn record_error(kind: &str) {
    REQUEST_ERRORS_TOTAL.with_label_values(&[kind]).inc();
}

pub fn set_key_count(n: usize) {
    KEYS.set(i64::try_from(n).unwrap_or(i64::MAX));
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
