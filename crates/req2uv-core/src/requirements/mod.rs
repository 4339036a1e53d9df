//! Pinned `requirements.txt` handling.
//!
//! A compiled requirements file lists every package as `name==version` at
//! column zero, optionally followed by `# via ...` comment lines naming what
//! pulled the package in. Packages whose annotation block names the project
//! manifest (e.g. `# via my-app (pyproject.toml)`) are direct dependencies.

pub mod classifier;

use crate::core::error::{MigrateError, MigrateResult};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub use classifier::{classify, direct_dependencies, ClassifiedEntries};

/// Marker identifying the project's own manifest in `# via` annotations.
pub const DEFAULT_MANIFEST_MARKER: &str = "pyproject.toml";

/// A top-level `name==version` pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub name: String,
    pub pinned_version: String,
    /// 1-based line number of the pin in the source file
    pub line: usize,
}

impl PackageEntry {
    /// Parse a raw line as a pin. Returns `None` for anything that is not a
    /// zero-indented line containing `==` with a non-empty name.
    pub fn parse(raw: &str, line: usize) -> Option<Self> {
        if raw.starts_with(char::is_whitespace) {
            return None;
        }
        let trimmed = raw.trim();
        if trimmed.starts_with('#') {
            return None;
        }

        let (name, rest) = trimmed.split_once("==")?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // Drop environment markers (`; python_version < "3.11"`) and
        // line continuations.
        let pinned_version = rest
            .trim_start()
            .split(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or_default()
            .to_string();

        Some(Self {
            name: name.to_string(),
            pinned_version,
            line,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Declared by the project's own manifest
    Direct,
    /// Only required by other packages
    Transitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEntry {
    #[serde(flatten)]
    pub entry: PackageEntry,
    pub kind: DependencyKind,
}

impl ClassifiedEntry {
    pub fn new(entry: PackageEntry, direct: bool) -> Self {
        let kind = if direct {
            DependencyKind::Direct
        } else {
            DependencyKind::Transitive
        };
        Self { entry, kind }
    }

    pub fn is_direct(&self) -> bool {
        self.kind == DependencyKind::Direct
    }
}

/// Every pin of a requirements file in file order, with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub marker: String,
    pub entries: Vec<ClassifiedEntry>,
}

impl Classification {
    /// Direct dependency names in first-seen order. Duplicates are kept.
    pub fn direct_names(&self) -> Vec<String> {
        self.names_of(DependencyKind::Direct)
    }

    pub fn transitive_names(&self) -> Vec<String> {
        self.names_of(DependencyKind::Transitive)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn names_of(&self, kind: DependencyKind) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.entry.name.clone())
            .collect()
    }
}

/// Read and classify a requirements file.
pub fn classify_file(path: &Path, marker: &str) -> MigrateResult<Classification> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MigrateError::RequirementsNotFound(path.to_path_buf()),
        _ => MigrateError::Io(e),
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read requirements file");
    Ok(classify(&content, marker))
}

/// Read a requirements file and return its direct dependency names.
pub fn read_direct_dependencies(path: &Path, marker: &str) -> MigrateResult<Vec<String>> {
    Ok(classify_file(path, marker)?.direct_names())
}
