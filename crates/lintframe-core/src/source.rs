//! Source units handed to the analysis engine.

use std::path::{Path, PathBuf};

use crate::error::LinterError;

/// URI scheme carried by every source unit, on disk or in memory.
pub const FILE_SCHEME: &str = "file";

/// Where a unit's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the filesystem.
    Disk,
    /// Supplied by the caller, tagged with a synthetic name.
    Memory,
}

/// One unit of source text to analyse.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    name: String,
    path: PathBuf,
    content: String,
    origin: Origin,
}

impl SourceUnit {
    /// Reads a unit from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LinterError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, LinterError> {
        let content = std::fs::read_to_string(path).map_err(|e| LinterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self {
            name,
            path: path.to_path_buf(),
            content,
            origin: Origin::Disk,
        })
    }

    /// Wraps in-memory text under a synthetic name.
    #[must_use]
    pub fn in_memory(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            content: content.into(),
            origin: Origin::Memory,
        }
    }

    /// Short name (file name or synthetic name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path used in diagnostic locations.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Where the text came from.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// `file:` URI for this unit.
    #[must_use]
    pub fn uri(&self) -> String {
        let path = self.path.to_string_lossy().replace('\\', "/");
        let path = path.trim_start_matches('/');
        format!("{FILE_SCHEME}:///{path}")
    }

    /// Whether the unit holds Rust source.
    #[must_use]
    pub fn is_rust(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == "rs")
    }
}
