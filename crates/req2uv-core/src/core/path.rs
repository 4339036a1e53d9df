use crate::core::error::{MigrateError, MigrateResult};
use std::path::{Path, PathBuf};

/// Get the req2uv home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\req2uv
/// - Linux: ~/.config/req2uv
/// - macOS: ~/Library/Application Support/req2uv
pub fn req2uv_home() -> MigrateResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| MigrateError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("req2uv"))
}

/// Get the config file path (`<req2uv_home>/config.yaml`)
pub fn config_file() -> MigrateResult<PathBuf> {
    Ok(req2uv_home()?.join("config.yaml"))
}

/// Directory the manifest tool should run in: the one holding the
/// requirements file, or the current directory for a bare file name.
pub fn project_dir_for(requirements_file: &Path) -> PathBuf {
    match requirements_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
