#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use vigil_core::model::{ArtifactFormat, ArtifactLoader, CustomObjects, SavedModelLoader};


#[test]
fn loads_complete_artifact_and_binds_metrics() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "vivit_model");

    let handle = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect("must load");

    assert_eq!(handle.format(), ArtifactFormat::SavedModelBinary);
    assert_eq!(handle.variable_shards(), 1);
    assert!(handle.graph_bytes() > 0);

    let mut bound: Vec<_> = handle.bound_metrics().collect();
    bound.sort();
    assert_eq!(bound, vec!["f1_m", "precision_m", "recall_m"]);
    assert!(handle.metric("f1_m").is_some());
    assert!(handle.metric("accuracy").is_none());
}

#[test]
fn text_graph_without_variables_is_accepted() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tiny");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("saved_model.pbtxt"), "meta_graphs {}").unwrap();

    let handle = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect("must load");
    assert_eq!(handle.format(), ArtifactFormat::SavedModelText);
    assert_eq!(handle.variable_shards(), 0);
    assert_eq!(handle.bound_metrics().count(), 0);
}

#[test]
fn missing_graph_file_is_a_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("empty_model");
    fs::create_dir(&dir).unwrap();

    let err = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "LOAD_FAILED");
    assert!(err.to_string().contains("SavedModel file does not exist"), "{err}");
}

#[test]
fn empty_graph_file_is_a_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("truncated");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("saved_model.pb"), b"").unwrap();

    let err = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "LOAD_FAILED");
}

#[test]
fn variables_without_shards_is_a_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");
    fs::remove_file(dir.join("variables/variables.data-00000-of-00001")).unwrap();

    let err = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect_err("must fail");
    assert!(err.to_string().contains("no variable data shards"), "{err}");
}

#[test]
fn variables_without_index_is_a_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");
    fs::remove_file(dir.join("variables/variables.index")).unwrap();

    let err = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect_err("must fail");
    assert!(err.to_string().contains("variables index missing"), "{err}");
}

#[test]
fn plain_file_is_not_a_saved_model() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("model.h5");
    fs::write(&file, b"HDF").unwrap();

    let err = SavedModelLoader::new()
        .load(&file, &CustomObjects::standard())
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "LOAD_FAILED");
}

#[test]
fn metadata_naming_unregistered_metric_is_a_load_error() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");

    let mut objs = CustomObjects::new();
    objs.register("f1_m", |_, _| 0.25);

    let err = SavedModelLoader::new().load(&dir, &objs).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "LOAD_FAILED");
    assert_eq!(err.to_string(), "Unknown metric function: precision_m");
}

#[test]
fn empty_custom_objects_cannot_load_artifact_with_metrics() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");

    let err = SavedModelLoader::new()
        .load(&dir, &CustomObjects::new())
        .expect_err("must fail");
    assert!(err.to_string().starts_with("Unknown metric function: "), "{err}");
}

#[test]
fn metric_names_match_whole_identifiers_only() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");
    fs::write(
        dir.join("keras_metadata.pb"),
        br#"{"metrics": ["precision_macro", "recall_micro", "accuracy"]}"#,
    )
    .unwrap();

    let handle = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .expect("names that only share a prefix are not references");
    assert_eq!(handle.bound_metrics().count(), 0);
    assert!(handle.metric("precision_m").is_none());
}

#[test]
fn repeated_references_bind_once() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");
    fs::write(
        dir.join("keras_metadata.pb"),
        br#"{"metrics": ["f1_m"], "compile_config": {"weighted_metrics": ["f1_m"]}}"#,
    )
    .unwrap();

    let handle = SavedModelLoader::new()
        .load(&dir, &CustomObjects::standard())
        .unwrap();
    assert_eq!(handle.bound_metrics().collect::<Vec<_>>(), vec!["f1_m"]);
}

#[test]
fn unknown_metric_reference_fails_registry_load_and_keeps_state() {
    use std::sync::Arc;
    use vigil_core::model::ModelRegistry;

    let tmp = tempfile::tempdir().unwrap();
    let dir = artifact_fixture::write_saved_model(tmp.path(), "m");
    let reg = ModelRegistry::new(Arc::new(SavedModelLoader::new()), CustomObjects::new());

    let err = reg.load(&dir).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "LOAD_FAILED");
    assert!(!reg.is_loaded());
}
