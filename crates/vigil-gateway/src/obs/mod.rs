//! Lightweight in-process metrics.
//!
//! Counters and histograms are stored as atomics in `DashMap`s and rendered in
//! Prometheus text format by the `/metrics` handler. [`track_requests`] feeds
//! the per-route request counter.

pub mod metrics;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub use metrics::ServiceMetrics;

/// Count every routed request by matched path and response status.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let resp = next.run(req).await;
    state
        .metrics()
        .http_requests
        .inc(&[("route", route.as_str()), ("status", resp.status().as_str())]);
    resp
}
