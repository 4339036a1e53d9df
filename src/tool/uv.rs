use crate::core::{MigrateError, MigrateResult};
use crate::di::ManifestTool;
use crate::tool::{display_command, ToolOutput};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Runs `uv add` (or a configured stand-in) as a child process
pub struct UvTool {
    program: String,
}

impl UvTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for UvTool {
    fn default() -> Self {
        Self::new("uv")
    }
}

impl ManifestTool for UvTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn ensure_available(&self) -> MigrateResult<()> {
        which::which(&self.program)
            .map(|path| tracing::debug!(path = %path.display(), "found manifest tool"))
            .map_err(|_| MigrateError::ToolNotFound(self.program.clone()))
    }

    fn add(&self, packages: &[String], cwd: &Path) -> MigrateResult<ToolOutput> {
        let command = display_command(&self.program, packages);
        tracing::debug!(%command, cwd = %cwd.display(), "running manifest tool");

        let output = Command::new(&self.program)
            .arg("add")
            .args(packages)
            .current_dir(cwd)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => MigrateError::ToolNotFound(self.program.clone()),
                _ => MigrateError::Io(e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!(code = ?output.status.code(), "manifest tool failed");
            return Err(MigrateError::ToolFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }
}
