//! Vigil gateway binary.
//!
//! - Config from `vigil.yaml` (or `$VIGIL_CONFIG`), defaults when absent
//! - Optional model load at boot; failure is logged, not fatal
//! - Debug-level tracing unless `RUST_LOG` says otherwise
//! - Graceful shutdown on Ctrl-C / SIGTERM (readyz flips to draining)

use tracing_subscriber::{fmt, EnvFilter};

use vigil_core::error::{Result, VigilError};
use vigil_gateway::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "vigil.yaml";
const DEFAULT_LOG_FILTER: &str = "vigil_gateway=debug,vigil_core=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cfg_path = std::env::var("VIGIL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&cfg_path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);

    if state.cfg().model.load_on_startup {
        match state.load_model().await {
            Ok(h) => tracing::info!(generation = h.generation(), "startup model load complete"),
            Err(e) => tracing::warn!(error = %e, "startup model load failed, continuing unloaded"),
        }
    }

    let app = router::build_router(state.clone());

    tracing::info!(%listen, model_path = %state.cfg().model.path.display(), "vigil-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| VigilError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| VigilError::Internal(format!("server failed: {e}")))?;

    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
