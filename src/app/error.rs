use std::path::PathBuf;

use thiserror::Error;

/// Failures that leave the line total incomplete and end the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot access {path}: {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read directory tree under {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
}
