//! Metrics collection and Prometheus export.
//!
//! Owns the recorder behind the analysis pipeline's series:
//! `analysis_requests_total`, `analysis_failures_total`, and the
//! `analysis_risk_score` histogram, bucketed for its [0,100] range.

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Histogram buckets covering the risk-score range; the >40 and >70
/// severity thresholds fall on bucket edges.
const RISK_SCORE_BUCKETS: &[f64] = &[
    10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder and describe the analysis series.
///
/// This must be called once at startup before any metrics are recorded.
/// Panics if called more than once.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("analysis_risk_score".to_string()),
            RISK_SCORE_BUCKETS,
        )
        .expect("invalid risk-score buckets")
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    describe_counter!(
        "analysis_requests_total",
        Unit::Count,
        "Contract submissions accepted for analysis"
    );
    describe_counter!(
        "analysis_failures_total",
        Unit::Count,
        "Analyses that failed at the model provider"
    );
    describe_histogram!(
        "analysis_risk_score",
        "Risk score extracted from the model reply"
    );

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Get the current metrics in Prometheus text format.
///
/// Returns a string suitable for the /metrics HTTP endpoint.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
