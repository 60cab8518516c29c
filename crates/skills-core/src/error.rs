//! Error types for skills-core

use std::path::PathBuf;

/// Result type for skills-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skills-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A catalog directory could not be listed
    #[error("Failed to read component directory {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings document could not be serialized
    #[error("Failed to render settings for {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from skills-fs
    #[error(transparent)]
    Fs(#[from] skills_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
