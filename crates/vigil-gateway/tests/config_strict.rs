#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use vigil_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
model:
  path: "api/model/vivit_model"
  load_on_start: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "127.0.0.1:5000");
    assert!(cfg.server.cors_allowed_origins.is_empty());
    assert_eq!(cfg.model.path, Path::new("api/model/vivit_model"));
    assert!(!cfg.model.load_on_startup);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_wildcard_origin() {
    let bad = r#"
version: 1
server:
  cors_allowed_origins: ["*"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("cors_allowed_origins"), "{err}");
}

#[test]
fn rejects_empty_model_path() {
    let bad = r#"
version: 1
model:
  path: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  cors_allowed_origins: ["http://localhost:5173"]
model:
  path: "/srv/models/vivit"
  load_on_startup: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
    assert_eq!(cfg.server.cors_allowed_origins, vec!["http://localhost:5173"]);
    assert!(cfg.model.load_on_startup);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("absent.yaml");
    let cfg = config::load_or_default(path.to_str().unwrap()).expect("defaults");
    assert_eq!(cfg.server.listen, "127.0.0.1:5000");

    let err = config::load_from_file(path.to_str().unwrap()).expect_err("strict load must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
