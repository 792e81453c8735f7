use thiserror::Error;

/// Errors that can occur while generating a ROM manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The ROM directory does not exist or could not be listed
    #[error("I/O error reading ROM directory {path}: {source}")]
    DirectoryAccess {
        path: String,
        source: std::io::Error,
    },

    /// The manifest could not be encoded as JSON
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The manifest file could not be written
    #[error("I/O error writing manifest {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
