//! Artifact loading seam.
//!
//! The registry only ever talks to [`ArtifactLoader`]. [`SavedModelLoader`]
//! checks the on-disk layout of a SavedModel directory and binds the custom
//! objects its metadata references, refusing artifacts that name a metric the
//! caller did not supply. The graph and weight bytes stay opaque.

use std::fs;
use std::path::Path;

use crate::error::{Result, VigilError};

use super::custom::{CustomObjects, MetricFn};
use super::handle::{ArtifactFormat, ModelHandle};

/// Turns an artifact directory into a [`ModelHandle`].
///
/// Implementations may assume `path` existed when the registry checked it;
/// every failure must come back as `VigilError::ModelLoad`.
pub trait ArtifactLoader: Send + Sync {
    fn load(&self, path: &Path, custom_objects: &CustomObjects) -> Result<ModelHandle>;
}

const METADATA_FILE: &str = "keras_metadata.pb";
const VARIABLES_DIR: &str = "variables";
const VARIABLES_INDEX: &str = "variables.index";
const VARIABLES_SHARD_PREFIX: &str = "variables.data-";
const METRIC_SUFFIX: &str = "_m";

#[derive(Debug, Default, Clone, Copy)]
pub struct SavedModelLoader;

impl SavedModelLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactLoader for SavedModelLoader {
    fn load(&self, path: &Path, custom_objects: &CustomObjects) -> Result<ModelHandle> {
        let meta = fs::metadata(path).map_err(|e| load_err(path, e))?;
        if !meta.is_dir() {
            return Err(VigilError::ModelLoad(format!(
                "{} is not a SavedModel directory",
                path.display()
            )));
        }

        let (format, graph_bytes) = locate_graph(path)?;
        let variable_shards = count_variable_shards(path)?;
        let metrics = bind_custom_objects(path, custom_objects)?;

        tracing::debug!(
            path = %path.display(),
            format = format.as_str(),
            graph_bytes,
            variable_shards,
            bound = metrics.len(),
            "saved model layout verified"
        );

        Ok(ModelHandle::new(path, format, graph_bytes, variable_shards, metrics))
    }
}

fn load_err(path: &Path, e: std::io::Error) -> VigilError {
    VigilError::ModelLoad(format!("{}: {e}", path.display()))
}

fn locate_graph(dir: &Path) -> Result<(ArtifactFormat, u64)> {
    for format in [ArtifactFormat::SavedModelText, ArtifactFormat::SavedModelBinary] {
        let file = dir.join(format.as_str());
        match fs::metadata(&file) {
            Ok(m) if m.is_file() => {
                if m.len() == 0 {
                    return Err(VigilError::ModelLoad(format!(
                        "{} is empty",
                        file.display()
                    )));
                }
                return Ok((format, m.len()));
            }
            Ok(_) => continue,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(load_err(&file, e)),
        }
    }

    Err(VigilError::ModelLoad(format!(
        "SavedModel file does not exist at: {}/{{saved_model.pbtxt|saved_model.pb}}",
        dir.display()
    )))
}

/// A model without variables is valid. If the directory is present it must
/// hold an index and at least one data shard.
fn count_variable_shards(dir: &Path) -> Result<usize> {
    let vars = dir.join(VARIABLES_DIR);
    if !vars.is_dir() {
        return Ok(0);
    }

    if !vars.join(VARIABLES_INDEX).is_file() {
        return Err(VigilError::ModelLoad(format!(
            "variables index missing at {}",
            vars.join(VARIABLES_INDEX).display()
        )));
    }

    let mut shards = 0;
    for entry in fs::read_dir(&vars).map_err(|e| load_err(&vars, e))? {
        let entry = entry.map_err(|e| load_err(&vars, e))?;
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(VARIABLES_SHARD_PREFIX)
        {
            shards += 1;
        }
    }

    if shards == 0 {
        return Err(VigilError::ModelLoad(format!(
            "no variable data shards in {}",
            vars.display()
        )));
    }
    Ok(shards)
}

/// Resolve every metric the artifact metadata names against `custom_objects`.
///
/// A referenced name with no registered function fails the load, the same way
/// the framework refuses an artifact compiled with an unknown metric.
fn bind_custom_objects(
    dir: &Path,
    custom_objects: &CustomObjects,
) -> Result<Vec<(&'static str, MetricFn)>> {
    let file = dir.join(METADATA_FILE);
    let raw = match fs::read(&file) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(load_err(&file, e)),
    };
    let text = String::from_utf8_lossy(&raw);

    let mut bound: Vec<(&'static str, MetricFn)> = Vec::new();
    for name in referenced_metrics(&text) {
        let Some((registered, f)) = custom_objects
            .names()
            .find(|n| *n == name)
            .and_then(|n| custom_objects.get(n).map(|f| (n, f)))
        else {
            return Err(VigilError::ModelLoad(format!(
                "Unknown metric function: {name}"
            )));
        };
        bound.push((registered, f));
    }
    Ok(bound)
}

/// Whole identifiers in the metadata that follow the `*_m` custom metric
/// naming, deduplicated in order of first appearance.
fn referenced_metrics(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for token in text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_')) {
        if token.len() > METRIC_SUFFIX.len()
            && token.ends_with(METRIC_SUFFIX)
            && !names.contains(&token)
        {
            names.push(token);
        }
    }
    names
}
