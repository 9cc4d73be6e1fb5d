//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/readyz`  : readiness plus model state (503 when draining)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub model_loaded: bool,
    pub model_generation: u64,
}

/// Serving is independent of model state: an unloaded service still answers
/// the status routes, so only draining makes it unready.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let current = state.registry().current();
    let (code, status) = if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    };

    (
        code,
        Json(Readiness {
            status,
            model_loaded: current.is_some(),
            model_generation: current.map(|h| h.generation()).unwrap_or(0),
        }),
    )
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let extra = state.metrics_extra();
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
