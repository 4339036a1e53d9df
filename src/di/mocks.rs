//! Mock implementations of service traits for testing

use super::traits::ManifestTool;
use crate::core::{MigrateError, MigrateResult};
use crate::tool::{display_command, ToolOutput};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A recorded call to [`MockManifestTool::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCall {
    pub packages: Vec<String>,
    pub cwd: PathBuf,
}

/// Mock manifest tool for testing
///
/// Records every `add` call and answers with a canned result.
///
/// # Example
///
/// ```
/// use req2uv::di::mocks::MockManifestTool;
/// use req2uv::di::ManifestTool;
/// use std::path::Path;
///
/// let tool = MockManifestTool::succeeding("Resolved 2 packages");
/// tool.add(&["fastapi".to_string()], Path::new(".")).unwrap();
/// assert_eq!(tool.calls().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockManifestTool {
    pub program: String,
    pub available: bool,
    stdout: String,
    failure: Option<(Option<i32>, String)>,
    calls: Arc<Mutex<Vec<AddCall>>>,
}

impl MockManifestTool {
    /// A tool that succeeds and prints `stdout`
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            program: "uv".to_string(),
            available: true,
            stdout: stdout.to_string(),
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A tool that exits with `code` and prints `stderr`
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self {
            failure: Some((Some(code), stderr.to_string())),
            ..Self::succeeding("")
        }
    }

    /// A tool that is not installed
    pub fn missing() -> Self {
        Self {
            available: false,
            ..Self::succeeding("")
        }
    }

    /// Every `add` call made so far
    pub fn calls(&self) -> Vec<AddCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockManifestTool {
    fn default() -> Self {
        Self::succeeding("")
    }
}

impl ManifestTool for MockManifestTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn ensure_available(&self) -> MigrateResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(MigrateError::ToolNotFound(self.program.clone()))
        }
    }

    fn add(&self, packages: &[String], cwd: &Path) -> MigrateResult<ToolOutput> {
        self.calls.lock().unwrap().push(AddCall {
            packages: packages.to_vec(),
            cwd: cwd.to_path_buf(),
        });

        match &self.failure {
            Some((code, stderr)) => Err(MigrateError::ToolFailed {
                command: display_command(&self.program, packages),
                code: *code,
                stderr: stderr.clone(),
            }),
            None => Ok(ToolOutput {
                stdout: self.stdout.clone(),
                stderr: String::new(),
            }),
        }
    }
}
