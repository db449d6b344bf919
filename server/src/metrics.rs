//! Request metrics for the game API, scraped at `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const METRICS_PATH: &str = "/metrics";

/// Shared by every worker. Liveness probes are left out of the request
/// counters so they don't drown real game traffic.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    let labels = HashMap::from([("service".to_string(), "pet-sim".to_string())]);
    PrometheusMetricsBuilder::new("petsim")
        .endpoint(METRICS_PATH)
        .exclude("/api/healthz")
        .const_labels(labels)
        .build()
        .expect("metrics builder")
});
