//! Shared application state for the Vigil gateway.
//!
//! Holds the config, the model registry, and service metrics behind one `Arc`
//! so axum can clone the state per request.

use std::sync::Arc;
use std::time::Instant;

use vigil_core::error::{ClientCode, Result, VigilError};
use vigil_core::model::{ArtifactLoader, CustomObjects, ModelHandle, ModelRegistry, SavedModelLoader};

use crate::config::GatewayConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: ModelRegistry,
    metrics: ServiceMetrics,
}

impl AppState {
    /// State backed by the SavedModel directory loader.
    pub fn new(cfg: GatewayConfig) -> Self {
        Self::with_loader(cfg, Arc::new(SavedModelLoader::new()))
    }

    pub fn with_loader(cfg: GatewayConfig, loader: Arc<dyn ArtifactLoader>) -> Self {
        let registry = ModelRegistry::new(loader, CustomObjects::standard());
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    /// Gauges derived from registry state at render time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        let current = self.registry().current();
        vec![
            ("vigil_model_loaded", u64::from(current.is_some())),
            ("vigil_model_generation", current.map(|h| h.generation()).unwrap_or(0)),
        ]
    }

    /// Load the configured artifact off the async runtime and record the outcome.
    pub async fn load_model(&self) -> Result<Arc<ModelHandle>> {
        let state = self.clone();
        let started = Instant::now();

        let res = tokio::task::spawn_blocking(move || {
            state.registry().load(&state.cfg().model.path)
        })
        .await
        .unwrap_or_else(|e| Err(VigilError::Internal(format!("load task failed: {e}"))));

        let outcome = match &res {
            Ok(_) => "success",
            Err(e) if e.client_code() == ClientCode::NotFound => "not_found",
            Err(_) => "error",
        };
        let metrics = self.metrics();
        metrics.model_loads.inc(&[("outcome", outcome)]);
        metrics
            .model_load_duration
            .observe(&[("outcome", outcome)], started.elapsed());

        res
    }
}
