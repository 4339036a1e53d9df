use crate::core::path::config_file;
use crate::core::{MigrateError, MigrateResult};
use crate::di::ConfigProvider;
use req2uv_core::DEFAULT_MANIFEST_MARKER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Requirements file to migrate, relative to the working directory
    #[serde(default = "default_requirements_file")]
    pub requirements_file: PathBuf,

    /// Text identifying the project's own manifest in `# via` annotations
    #[serde(default = "default_manifest_marker")]
    pub manifest_marker: String,

    /// Manifest tool invoked as `<tool> add <packages...>`
    #[serde(default = "default_tool")]
    pub tool: String,
}

fn default_requirements_file() -> PathBuf {
    PathBuf::from("requirements.txt")
}

fn default_manifest_marker() -> String {
    DEFAULT_MANIFEST_MARKER.to_string()
}

fn default_tool() -> String {
    "uv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            requirements_file: default_requirements_file(),
            manifest_marker: default_manifest_marker(),
            tool: default_tool(),
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, falling back
    /// to defaults when no file exists
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\req2uv\config.yaml
    /// - Linux: ~/.config/req2uv/config.yaml
    /// - macOS: ~/Library/Application Support/req2uv/config.yaml
    pub fn load() -> MigrateResult<Self> {
        let config_path = config_file()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> MigrateResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MigrateError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| MigrateError::Config(format!("Failed to parse config: {}", e)))?;

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        requirements_file: Option<PathBuf>,
        manifest_marker: Option<String>,
        tool: Option<String>,
    ) -> MigrateResult<Self> {
        if let Some(file) = requirements_file {
            self.requirements_file = file;
        }
        if let Some(marker) = manifest_marker {
            self.manifest_marker = marker;
        }
        if let Some(tool) = tool {
            self.tool = tool;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> MigrateResult<()> {
        // An empty marker would match every annotation line.
        if self.manifest_marker.trim().is_empty() {
            return Err(MigrateError::Config(
                "manifest_marker must not be empty".to_string(),
            ));
        }
        if self.tool.trim().is_empty() {
            return Err(MigrateError::Config("tool must not be empty".to_string()));
        }
        Ok(())
    }
}

impl ConfigProvider for Config {
    fn requirements_file(&self) -> &Path {
        &self.requirements_file
    }

    fn manifest_marker(&self) -> &str {
        &self.manifest_marker
    }

    fn tool(&self) -> &str {
        &self.tool
    }
}
