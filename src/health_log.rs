use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Destination of probe results: stdout plus an append-only file.
#[derive(Debug, Clone)]
pub struct HealthLog {
    path: PathBuf,
}

impl HealthLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Print `line` and append it, newline terminated, to the log file.
    /// The file is created if it does not exist yet.
    pub fn record(&self, line: &str) -> Result<(), AppError> {
        println!("{line}");
        self.append(line)
    }

    fn append(&self, line: &str) -> Result<(), AppError> {
        let io_err = |source: std::io::Error| AppError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        writeln!(file, "{line}").map_err(io_err)
    }
}
