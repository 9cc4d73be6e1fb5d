//! Model lifecycle: custom objects, artifact loading, and the registry.
//!
//! The artifact itself is opaque. [`ArtifactLoader`] is the seam where the
//! external format is interpreted; [`ModelRegistry`] owns the single current
//! [`ModelHandle`] and classifies failures.

pub mod custom;
pub mod handle;
pub mod loader;
pub mod registry;

pub use custom::{CustomObjects, MetricFn};
pub use handle::{ArtifactFormat, ModelHandle};
pub use loader::{ArtifactLoader, SavedModelLoader};
pub use registry::ModelRegistry;
