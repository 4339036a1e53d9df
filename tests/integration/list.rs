//! Tests for `req2uv list`

use super::common::{req2uv_command, REQUIREMENTS};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_list_direct_only() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), REQUIREMENTS).unwrap();

    let output = req2uv_command(temp.path())
        .arg("list")
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fastapi\npydantic\nuvicorn\n"
    );
}

#[test]
fn test_list_all_shows_kinds() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), REQUIREMENTS).unwrap();

    let output = req2uv_command(temp.path())
        .args(["list", "--all"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("anyio==4.3.0  (transitive)"));
    assert!(stdout.contains("fastapi==0.110.0  (direct)"));
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), REQUIREMENTS).unwrap();

    let output = req2uv_command(temp.path())
        .args(["list", "--json", "--all"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"marker\": \"pyproject.toml\""));
    assert!(stdout.contains("\"kind\": \"transitive\""));
    assert!(stdout.contains("\"name\": \"uvicorn\""));
}
