//! Vigil gateway library entry.
//!
//! Wires the model registry from `vigil-core` behind an axum router: the
//! model/status/feature API the front-end polls, ops endpoints, CORS, and
//! request metrics. Consumed by the binary (`main.rs`) and integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
