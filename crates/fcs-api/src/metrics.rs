//! Prometheus metrics for the HTTP surface.

use std::{sync::LazyLock, time::Instant};

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

static UUID_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .expect("uuid pattern is valid")
});
static NUMERIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d+(/|$)").expect("numeric pattern is valid"));

/// Install the global Prometheus recorder.
///
/// Can only succeed once per process.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5],
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Record request count, latency and in-flight requests.
///
/// Without an installed recorder the macros are no-ops.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let in_flight = gauge!("http_requests_in_flight", "method" => method.clone(), "path" => path.clone());
    in_flight.increment(1.0);

    let response = next.run(req).await;

    in_flight.decrement(1.0);

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Collapse identifiers in a path so every deck or card shares one label.
fn normalize_path(path: &str) -> String {
    let without_uuids = UUID_SEGMENT.replace_all(path, ":id");
    // Run twice: adjacent numeric segments share the separating slash.
    let once = NUMERIC_SEGMENT.replace_all(&without_uuids, "/:id$1");
    NUMERIC_SEGMENT.replace_all(&once, "/:id$1").into_owned()
}

/// `GET /metrics` backed by `handle`, ready to be merged next to the resource
/// routes.
pub fn routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(handle)
}

/// Serve the Prometheus text exposition.
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}
