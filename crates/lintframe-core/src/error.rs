//! Error types for the lint framework.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// A proposed rule name does not follow the camel-case convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid rule name `{name}`: expected UpperCamelCase with optional leading underscores")]
pub struct NameError {
    /// The offending string.
    pub name: String,
}

impl NameError {
    /// Creates an error for the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordinal comparison that cannot be decided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// One side of the comparison is a custom value without an ordinal.
    #[error("Cannot order `{name}`: it has no ordinal")]
    UnsetOrdinal {
        /// Name of the value missing an ordinal.
        name: String,
    },
}

/// Framework-level failure while linting a source unit.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The source could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The analysis engine could not set up or finish a session.
    #[error(
        "Analysis engine failed{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Engine {
        /// Optional detail from the engine.
        message: Option<String>,
    },

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A rule definition carries an invalid name.
    #[error(transparent)]
    Name(#[from] NameError),
}

impl LinterError {
    /// Creates an engine error with a message.
    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: Some(message.into()),
        }
    }

    /// Detail message, if the error carries one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Engine { message } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}
