use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use std::path::PathBuf;

pub mod list;

pub mod constants {
    pub const REQUIREMENTS_TXT: &str = "requirements.txt";
    pub const CONFIG_YAML: &str = "config.yaml";
}

/// Test context that provides isolated environment for each test
pub struct TestContext {
    pub temp: TempDir,
    pub config_home: PathBuf,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with isolated environment
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.child("config").to_path_buf();
        let config_home = config_dir.join("req2uv");
        std::fs::create_dir_all(&config_home).unwrap();

        Self { temp, config_home }
    }

    /// Create a Command for running req2uv with proper environment
    pub fn req2uv(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("req2uv").unwrap();
        cmd.current_dir(&self.temp);
        cmd.env_remove("RUST_LOG");

        // Isolate the dirs-crate config lookup to the temp dir
        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            // macOS: dirs derives ~/Library/Application Support from HOME
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }

    /// Create requirements.txt with given content
    pub fn create_requirements(&self, content: &str) {
        self.temp
            .child(constants::REQUIREMENTS_TXT)
            .write_str(content)
            .unwrap();
    }

    /// Write the per-user config file (only honoured on Linux, where the
    /// config dir is redirected through XDG_CONFIG_HOME)
    pub fn create_user_config(&self, content: &str) {
        std::fs::write(self.config_home.join(constants::CONFIG_YAML), content).unwrap();
    }
}

pub const UV_COMPILED: &str = "\
# This file was autogenerated by uv via the following command:
#    uv pip compile pyproject.toml -o requirements.txt
click==8.1.7
    # via uvicorn
fastapi==0.110.0
    # via shell-script-manager (pyproject.toml)
h11==0.14.0
    # via uvicorn
uvicorn==0.29.0
    # via shell-script-manager (pyproject.toml)
";

#[test]
fn test_help_lists_subcommands() {
    let ctx = TestContext::new();
    ctx.req2uv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("list"));
}
