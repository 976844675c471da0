use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

const GRAPHQL_REQUESTS_TOTAL: &str = "hub_api_graphql_requests_total";
const GRAPHQL_REQUEST_DURATION_SECONDS: &str = "hub_api_graphql_request_duration_seconds";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub fn init_metrics() -> Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

pub fn render_metrics() -> Option<String> {
    METRICS_HANDLE.get().map(PrometheusHandle::render)
}

pub fn register_graphql_request(operation: &str, ok: bool, elapsed: Duration) {
    let result = if ok { "success" } else { "error" };

    counter!(
        GRAPHQL_REQUESTS_TOTAL,
        "operation" => operation.to_string(),
        "result" => result
    )
    .increment(1);

    histogram!(
        GRAPHQL_REQUEST_DURATION_SECONDS,
        "operation" => operation.to_string()
    )
    .record(elapsed.as_secs_f64());
}
