//! Integration tests for `hrm-api list`.

mod common;

use common::hrm_cmd;
use predicates::prelude::*;

#[test]
fn test_list_needs_no_configuration() {
    hrm_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("holidays "))
        .stdout(predicate::str::contains("create-report-definition"));
}

#[test]
fn test_list_json() {
    let output = hrm_cmd().args(["list", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 15);
    assert_eq!(entries[14]["name"], "delete-candidate");
    assert!(entries[0]["description"].as_str().unwrap().contains("Holidays"));
}

#[test]
fn test_list_rejects_unknown_output_format() {
    hrm_cmd()
        .args(["list", "-o", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format: yaml"));
}
