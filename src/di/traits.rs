//! Trait definitions for dependency injection

use crate::core::MigrateResult;
use crate::tool::ToolOutput;
use std::path::Path;

/// Trait for configuration access
///
/// Provides read-only access to the resolved configuration (config file
/// merged with command-line overrides).
pub trait ConfigProvider: Send + Sync {
    /// Path of the requirements file to migrate
    fn requirements_file(&self) -> &Path;

    /// Text identifying the project's own manifest in `# via` annotations
    fn manifest_marker(&self) -> &str;

    /// Program name or path of the manifest tool
    fn tool(&self) -> &str;
}

/// Trait for the external manifest-management tool (`uv`)
///
/// The tool is a black box: it receives every direct dependency in a
/// single batch and reports success or failure with its own output.
pub trait ManifestTool: Send + Sync {
    /// Program name as shown to the user
    fn program(&self) -> &str;

    /// Fail early with `ToolNotFound` if the program cannot be run
    fn ensure_available(&self) -> MigrateResult<()>;

    /// Run `<program> add <packages...>` in `cwd`
    ///
    /// Returns the captured output on success and `ToolFailed` (carrying the
    /// tool's stderr) on a non-zero exit.
    fn add(&self, packages: &[String], cwd: &Path) -> MigrateResult<ToolOutput>;
}
