//! Error types for wikkit-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for wikkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wikkit-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No content is stored for the requested title.
    #[error("page not found: {title}")]
    NotFound {
        /// Title that was looked up
        title: String,
    },

    /// A title contains characters outside `[A-Za-z0-9]`, or is empty.
    #[error("invalid page title: {title:?}")]
    InvalidTitle {
        /// The rejected input
        title: String,
    },

    /// Underlying filesystem failure.
    #[error("unable to access {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Source error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates an I/O error tagged with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a not-found error for a title.
    pub fn not_found(title: impl Into<String>) -> Self {
        Error::NotFound {
            title: title.into(),
        }
    }

    /// Returns whether this error means the page simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
