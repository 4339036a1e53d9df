//! Service container for dependency injection

use super::traits::{ConfigProvider, ManifestTool};
use crate::config::Config;
use crate::tool::uv::UvTool;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the resolved configuration and the manifest tool behind trait
/// objects so the CLI drivers can be exercised against mocks.
///
/// # Example (Testing)
///
/// ```
/// use req2uv::config::Config;
/// use req2uv::di::{mocks::MockManifestTool, ManifestTool, ServiceContainer};
/// use std::sync::Arc;
///
/// let tool = Arc::new(MockManifestTool::succeeding("Resolved 3 packages"));
/// let container = ServiceContainer::with_providers(Arc::new(Config::default()), tool);
/// assert_eq!(container.tool.program(), "uv");
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub tool: Arc<dyn ManifestTool>,
}

impl ServiceContainer {
    /// Create a container with the real `uv` tool configured from `config`
    pub fn new(config: Config) -> Self {
        let tool = UvTool::new(config.tool.clone());
        Self {
            config: Arc::new(config),
            tool: Arc::new(tool),
        }
    }

    /// Create a service container with custom provider implementations
    pub fn with_providers(config: Arc<dyn ConfigProvider>, tool: Arc<dyn ManifestTool>) -> Self {
        Self { config, tool }
    }
}
