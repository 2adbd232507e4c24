//! Prometheus scrape endpoint.

use axum::{extract::State, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

async fn render_metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(render_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(handle)
}

/// Serve `/metrics` on `0.0.0.0:{port}` until the process exits.
pub async fn serve_metrics(port: u16, handle: PrometheusHandle) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Exporting prometheus metrics");
    axum::serve(listener, metrics_router(handle)).await
}
