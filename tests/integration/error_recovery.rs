//! Tests for failure exit codes and messages

use super::common::req2uv_command;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_requirements_file() {
    let temp = TempDir::new().unwrap();

    let output = req2uv_command(temp.path())
        .arg("migrate")
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Requirements file not found: requirements.txt"));
}

#[test]
fn test_no_direct_dependencies() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("requirements.txt"),
        "anyio==4.3.0\n    # via starlette\nsniffio==1.3.1\n    # via anyio\n",
    )
    .unwrap();

    let output = req2uv_command(temp.path())
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No direct dependencies found in requirements.txt"));
    assert!(stderr.contains("# via <project-name> (pyproject.toml)"));
}

#[test]
fn test_malformed_file_is_not_an_error_for_list() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("requirements.txt"),
        "    indented==1.0\n# via orphan (pyproject.toml)\n%%% garbage %%%\n",
    )
    .unwrap();

    let output = req2uv_command(temp.path())
        .args(["list", "--all"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No packages to list"));
}

#[test]
fn test_tool_not_found() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("requirements.txt"),
        "fastapi==0.110.0\n    # via demo (pyproject.toml)\n",
    )
    .unwrap();

    let output = req2uv_command(temp.path())
        .args(["--tool", "req2uv-test-definitely-missing-tool"])
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found on PATH"));
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("req2uv.yaml");
    fs::write(&config, "tool: [unclosed\n").unwrap();

    let output = req2uv_command(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}
