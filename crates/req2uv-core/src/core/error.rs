use std::path::PathBuf;
use thiserror::Error;

pub type MigrateResult<T> = Result<T, MigrateError>;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The requirements file does not exist or is not a file.
    #[error("Requirements file not found: {}", .0.display())]
    RequirementsNotFound(PathBuf),

    /// Parsing succeeded but no pinned package was annotated with the marker.
    #[error("No direct dependencies found in {}", .file.display())]
    NoDirectDependencies { file: PathBuf, marker: String },

    /// The manifest tool is not installed or not on PATH.
    #[error("Manifest tool '{0}' not found on PATH")]
    ToolNotFound(String),

    /// The manifest tool ran and exited unsuccessfully.
    /// `stderr` is relayed to the user verbatim.
    #[error("Error running {command}: exit status {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ToolFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}
