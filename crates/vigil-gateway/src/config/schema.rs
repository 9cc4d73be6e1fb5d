use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use serde::Deserialize;
use vigil_core::error::{Result, VigilError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub model: ModelSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            model: ModelSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VigilError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.model.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        for origin in &self.cors_allowed_origins {
            if origin == "*" {
                return Err(VigilError::BadRequest(
                    "server.cors_allowed_origins: use an empty list to allow any origin".into(),
                ));
            }
            HeaderValue::from_str(origin).map_err(|_| {
                VigilError::BadRequest(format!(
                    "server.cors_allowed_origins: invalid origin {origin:?}"
                ))
            })?;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            VigilError::BadRequest(format!(
                "server.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "127.0.0.1:5000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSection {
    #[serde(default = "default_model_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub load_on_startup: bool,
}

impl Default for ModelSection {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            load_on_startup: false,
        }
    }
}

impl ModelSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(VigilError::BadRequest("model.path must not be empty".into()));
        }
        Ok(())
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("api/model/vivit_model")
}
