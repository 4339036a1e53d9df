//! req2uv: migrate a compiled `requirements.txt` to a uv project
//!
//! This crate re-exports the classifier and error types from `req2uv-core`
//! and adds configuration, the manifest-tool seam and the CLI drivers.

pub use req2uv_core::requirements;
pub use req2uv_core::{format_error_with_help, ErrorHelp, MigrateError, MigrateResult};

/// Core module re-exported from req2uv-core.
pub mod core {
    pub use req2uv_core::core::*;
    pub use req2uv_core::error_help;

    /// Path module re-exported from req2uv-core.
    pub mod path {
        pub use req2uv_core::core::path::*;
    }
}

/// Configuration management.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// External manifest tool (`uv add`).
pub mod tool;
