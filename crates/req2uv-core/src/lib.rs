//! Core library for req2uv.
//!
//! Holds the error types, path helpers and the requirements.txt
//! classifier shared by the `req2uv` binary.

pub mod core;
pub mod error_help;
pub mod requirements;

pub use crate::core::error::{MigrateError, MigrateResult};
pub use error_help::{format_error_with_help, ErrorHelp};
pub use requirements::{
    classify, classify_file, direct_dependencies, read_direct_dependencies, Classification,
    ClassifiedEntry, DependencyKind, PackageEntry, DEFAULT_MANIFEST_MARKER,
};
