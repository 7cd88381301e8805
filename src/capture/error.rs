//! Capture file errors.

use std::path::PathBuf;

use crate::timing::TimingError;

/// Errors that can occur loading or saving a capture.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid timing file {path}: {source}")]
    Timing {
        path: PathBuf,
        #[source]
        source: TimingError,
    },

    #[error("Failed to back up {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to save {path}: it contains invalid UTF-8 that was replaced on load")]
    Lossy { path: PathBuf },

    #[error("Capture I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
