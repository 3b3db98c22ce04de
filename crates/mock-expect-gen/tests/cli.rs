//! Runs the compiled binary end to end.

use std::{path::Path, process::Command};

const BIN: &str = env!("CARGO_BIN_EXE_mock-expect-gen");

fn fixture(name: &str) -> String {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .join("fixtures")
    .join(name)
    .display()
    .to_string()
}

#[test]
fn generate_writes_go_file() {
  let dir = tempfile::tempdir().unwrap();
  let output = dir.path().join("mocks").join("api.go");

  let status = Command::new(BIN)
    .args(["--color", "never", "generate", "-q"])
    .args(["-e", &fixture("consul_endpoints.json")])
    .args(["-t", "MockConsulAPI", "-p", "mocks", "--tag", "integration"])
    .arg("-o")
    .arg(&output)
    .status()
    .unwrap();

  assert!(status.success());
  let code = std::fs::read_to_string(&output).unwrap();
  assert!(code.starts_with("// +build integration\n\n// Code generated by \"mock-expect-gen --color never generate -q -e "));
  assert!(code.contains("func NewMockConsulAPI(t mockapi.TestingT) *MockConsulAPI {"));
  assert!(code.contains("func (m *MockConsulAPI) ReadKV(key string, queryParams map[string]string, status int, reply interface{}) *mockapi.MockAPICall {"));
}

#[test]
fn missing_required_option_fails_before_work() {
  let dir = tempfile::tempdir().unwrap();
  let output = dir.path().join("api.go");

  let result = Command::new(BIN)
    .args(["generate", "-e", &fixture("consul_endpoints.json"), "-t", "MockConsulAPI"])
    .arg("-o")
    .arg(&output)
    .output()
    .unwrap();

  assert!(!result.status.success());
  assert!(String::from_utf8_lossy(&result.stderr).contains("--pkg"));
  assert!(!output.exists());
}

#[test]
fn invalid_package_name_is_rejected() {
  let dir = tempfile::tempdir().unwrap();
  let output = dir.path().join("api.go");

  let result = Command::new(BIN)
    .args(["generate", "-e", &fixture("consul_endpoints.json"), "-t", "MockConsulAPI", "-p", "type"])
    .arg("-o")
    .arg(&output)
    .output()
    .unwrap();

  assert!(!result.status.success());
  assert!(String::from_utf8_lossy(&result.stderr).contains("Package (-p) 'type'"));
  assert!(!output.exists());
}

#[test]
fn malformed_endpoint_leaves_no_output() {
  let dir = tempfile::tempdir().unwrap();
  let endpoints = dir.path().join("endpoints.json");
  std::fs::write(&endpoints, r#"{"Broken{": {"method": "GET", "path": "/v1/broken"}}"#).unwrap();
  let output = dir.path().join("api.go");

  let result = Command::new(BIN)
    .args(["--color", "never", "generate", "-q", "-t", "MockConsulAPI", "-p", "mocks"])
    .arg("-e")
    .arg(&endpoints)
    .arg("-o")
    .arg(&output)
    .output()
    .unwrap();

  assert!(!result.status.success());
  assert!(String::from_utf8_lossy(&result.stderr).contains("not valid Go"));
  assert!(!output.exists());
}

#[test]
fn list_endpoints_prints_table() {
  let result = Command::new(BIN)
    .args(["--color", "never", "list", "endpoints", "-e", &fixture("consul_endpoints.yaml")])
    .output()
    .unwrap();

  assert!(result.status.success());
  let stdout = String::from_utf8_lossy(&result.stdout);
  assert!(stdout.contains("NAME"));
  assert!(stdout.contains("ReadKV"));
}
