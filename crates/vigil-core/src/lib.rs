//! Vigil core: error surface, metric functions, and the model lifecycle.
//!
//! This crate owns everything that does not depend on HTTP: the artifact
//! loader that turns a model directory into an opaque handle, the registry
//! that holds at most one such handle, and the metric functions the artifact
//! references by name. The gateway crate layers transport on top.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Load failures surface as `VigilError` so the listener never goes down
//! because an artifact is missing or corrupt.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod eval;
pub mod model;

/// Shared result type.
pub use error::{Result, VigilError};
pub use model::{ArtifactLoader, CustomObjects, ModelHandle, ModelRegistry, SavedModelLoader};
