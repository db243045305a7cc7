//! Setup-level errors shared by both commands.
//!
//! Anything in here aborts a run before (or instead of) processing files.
//! Per-file problems are never errors: they are recorded as outcomes in the
//! generate and upload reports. Invalid arguments never get this far; they
//! are clap errors handled in the binaries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OnboardError {
    #[error("{} is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("cannot read directory {}: {source}", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan worked but nothing matched the expected filename pattern.
    #[error("no {pattern} files found in {}", dir.display())]
    NoInputFilesFound { dir: PathBuf, pattern: &'static str },

    /// The process working directory could not be determined.
    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("cannot build HTTP client: {0}")]
    Client(#[from] crate::client::ClientError),
}

impl OnboardError {
    /// Process exit status for this error. Every setup error is fatal with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type for setup-level operations.
pub type Result<T> = std::result::Result<T, OnboardError>;
