use std::io;
use std::path::PathBuf;

/// Failures that abort a probe run.
///
/// Transport errors from the probed endpoint are not represented here: they
/// are folded into a DOWN result instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to write health log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
