//! Dependency injection infrastructure for req2uv
//!
//! The manifest tool is the only external collaborator; putting it behind
//! [`ManifestTool`] lets the migrate driver run against
//! [`mocks::MockManifestTool`] in tests.

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, ManifestTool};
