//! Metrics collection for the agency site.
//!
//! Counters go through the `metrics` facade. Until [`init_metrics`] installs the
//! Prometheus recorder every call is a no-op, which keeps tests free of globals.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder. Call once from `main`.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("metrics handle already initialized"))?;

    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count a form submission by where it ended up.
pub fn record_submission(form: &'static str, storage: &'static str) {
    counter!("site_submissions_total", "form" => form, "storage" => storage).increment(1);
}

/// Count a store round trip by table and result.
pub fn record_store_call(table: &str, status: &'static str) {
    counter!(
        "site_store_calls_total",
        "table" => table.to_string(),
        "status" => status
    )
    .increment(1);
}
