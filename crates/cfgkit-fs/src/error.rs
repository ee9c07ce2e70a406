//! Error types for cfgkit-fs

use std::path::PathBuf;

/// Result type for cfgkit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cfgkit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("No config file has been bound; use ConfigStore::bind(config_name) first")]
    Uninitialized,

    #[error("Section [{section}] not found in {path}")]
    SectionNotFound { section: String, path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to parse {format} data at {path}: {message}")]
    MalformedData {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        format: &str,
        message: impl ToString,
    ) -> Self {
        Self::MalformedData {
            path: path.into(),
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error means the referenced file or directory is missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
