//! Tests for the dashboard binary's exit status

mod common;

use std::process::Command;

use common::{csv_with_rows, write_csv};

fn dashboard() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adoption-dashboard"));
    cmd.env("RUST_LOG", "off")
        .env_remove("ADOPTION_REGION")
        .env_remove("ADOPTION_SPECIALTY")
        .env_remove("ADOPTION_OUTPUT");
    cmd
}

#[test]
fn test_missing_data_file_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let output = dashboard()
        .env("ADOPTION_DATA_PATH", &path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Data file not found"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_valid_data_file_exits_with_success() {
    let (_dir, path) = write_csv(&csv_with_rows(&["2023-01-15,P1,West,Cardiology,1000"]));

    let output = dashboard()
        .env("ADOPTION_DATA_PATH", &path)
        .env("ADOPTION_OUTPUT", "json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["record_count"], 1);
}
