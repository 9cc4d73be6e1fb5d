use axum::{extract::State, Json};
use serde::Serialize;

use crate::app_state::AppState;

use super::features::{Features, FEATURES};

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub models_loaded: bool,
}

/// `GET /api/features`
pub async fn features() -> Json<&'static Features> {
    Json(&FEATURES)
}

/// `GET /api/status`
pub async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
        models_loaded: state.registry().is_loaded(),
    })
}
