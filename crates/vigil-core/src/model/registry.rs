use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};

use crate::error::{Result, VigilError};

use super::custom::CustomObjects;
use super::handle::ModelHandle;
use super::loader::ArtifactLoader;

/// Process-wide holder of at most one loaded model.
///
/// States: `Unloaded` (no handle) and `Loaded`. A successful load swaps the
/// handle in; a failed one leaves whatever was there. Loads are serialized by
/// `load_lock`; readers only take the short `current` read lock and get an
/// `Arc` snapshot, so a replaced handle lives until its last holder drops it.
pub struct ModelRegistry {
    loader: Arc<dyn ArtifactLoader>,
    custom_objects: CustomObjects,
    current: RwLock<Option<Arc<ModelHandle>>>,
    load_lock: Mutex<()>,
    generation: AtomicU64,
}

impl ModelRegistry {
    pub fn new(loader: Arc<dyn ArtifactLoader>, custom_objects: CustomObjects) -> Self {
        Self {
            loader,
            custom_objects,
            current: RwLock::new(None),
            load_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Load the artifact at `path` and make it the current model.
    ///
    /// Blocking: callers on an async runtime should go through
    /// `spawn_blocking`.
    pub fn load(&self, path: &Path) -> Result<Arc<ModelHandle>> {
        let _guard = self.load_lock.lock();

        if !path.exists() {
            tracing::error!(path = %path.display(), "model file not found");
            return Err(VigilError::ModelNotFound(path.to_path_buf()));
        }

        let started = Instant::now();
        let handle = match self.loader.load(path, &self.custom_objects) {
            Ok(h) => h,
            Err(e) => {
                let e = match e {
                    e @ VigilError::ModelLoad(_) => e,
                    other => VigilError::ModelLoad(other.to_string()),
                };
                tracing::error!(path = %path.display(), error = %e, "error loading model");
                return Err(e);
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let handle = Arc::new(handle.with_generation(generation));
        let previous = self.current.write().replace(Arc::clone(&handle));

        tracing::info!(
            path = %path.display(),
            generation,
            replaced = previous.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "model loaded successfully"
        );
        Ok(handle)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn current(&self) -> Option<Arc<ModelHandle>> {
        self.current.read().clone()
    }

    pub fn custom_objects(&self) -> &CustomObjects {
        &self.custom_objects
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("custom_objects", &self.custom_objects)
            .field("current", &self.current())
            .finish()
    }
}
