use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use vigil_core::error::{ClientCode, VigilError};

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub status: &'static str,
    pub message: String,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
}

/// `GET /api/model/load`: load the configured artifact.
///
/// 200 on success, 404 when the path is missing, 500 for anything else.
/// `model_loaded` is read back from the registry after the attempt, so a
/// failed reload still reports the previous model as loaded.
pub async fn load_model(State(state): State<AppState>) -> (StatusCode, Json<LoadResponse>) {
    let res = state.load_model().await;
    let model_loaded = state.registry().is_loaded();

    match res {
        Ok(_) => (
            StatusCode::OK,
            Json(LoadResponse {
                status: "success",
                message: "Model loaded successfully".into(),
                model_loaded,
            }),
        ),
        Err(e) => {
            let message = match &e {
                VigilError::ModelNotFound(_) => "Model file not found".to_string(),
                other => format!("Failed to load model: {other}"),
            };
            (
                http_status(e.client_code()),
                Json(LoadResponse {
                    status: "error",
                    message,
                    model_loaded,
                }),
            )
        }
    }
}

/// `GET /api/model/status`
pub async fn model_status(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(ModelStatus {
        model_loaded: state.registry().is_loaded(),
    })
}

fn http_status(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ClientCode::LoadFailed | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
