use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::custom::MetricFn;

/// Serialization flavour of the graph file found in the artifact directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// `saved_model.pb`
    SavedModelBinary,
    /// `saved_model.pbtxt`
    SavedModelText,
}

impl ArtifactFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactFormat::SavedModelBinary => "saved_model.pb",
            ArtifactFormat::SavedModelText => "saved_model.pbtxt",
        }
    }
}

/// In-memory reference to a deserialized model.
///
/// The contents are opaque to Vigil; only what the loader could observe about
/// the artifact is kept. Shared out of the registry as `Arc<ModelHandle>`.
pub struct ModelHandle {
    path: PathBuf,
    format: ArtifactFormat,
    graph_bytes: u64,
    variable_shards: usize,
    metrics: Vec<(&'static str, MetricFn)>,
    generation: u64,
    loaded_at: SystemTime,
}

impl ModelHandle {
    pub fn new(
        path: impl Into<PathBuf>,
        format: ArtifactFormat,
        graph_bytes: u64,
        variable_shards: usize,
        metrics: Vec<(&'static str, MetricFn)>,
    ) -> Self {
        Self {
            path: path.into(),
            format,
            graph_bytes,
            variable_shards,
            metrics,
            generation: 0,
            loaded_at: SystemTime::now(),
        }
    }

    /// Stamp the registry's load counter onto a freshly built handle.
    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ArtifactFormat {
        self.format
    }

    pub fn graph_bytes(&self) -> u64 {
        self.graph_bytes
    }

    pub fn variable_shards(&self) -> usize {
        self.variable_shards
    }

    /// 1 for the first successful load, incremented on every replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> SystemTime {
        self.loaded_at
    }

    /// Names of the custom objects the artifact referenced and the loader bound.
    pub fn bound_metrics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.iter().map(|(n, _)| *n)
    }

    pub fn metric(&self, name: &str) -> Option<MetricFn> {
        self.metrics.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("path", &self.path)
            .field("format", &self.format)
            .field("graph_bytes", &self.graph_bytes)
            .field("variable_shards", &self.variable_shards)
            .field("metrics", &self.bound_metrics().collect::<Vec<_>>())
            .field("generation", &self.generation)
            .finish()
    }
}
