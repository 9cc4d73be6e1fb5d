//! Axum router wiring.
//!
//! `/api/*` serves the front-end; `/healthz`, `/readyz` and `/metrics` are for
//! operators. CORS allows any origin unless `server.cors_allowed_origins`
//! lists specific ones.

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cfg().server.cors_allowed_origins);

    Router::new()
        .route("/api/model/load", get(api::load_model))
        .route("/api/model/status", get(api::model_status))
        .route("/api/features", get(api::features))
        .route("/api/status", get(api::system_status))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| HeaderValue::from_str(o).ok()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
