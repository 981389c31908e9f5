//! Error types for batch organization

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole batch
///
/// Per-file problems never surface here; they are reported as
/// [`OrganizerEvent::FileFailed`](crate::OrganizerEvent::FileFailed) and the
/// batch moves on.
#[derive(Error, Debug)]
pub enum OrganizerError {
    /// Input folder does not exist
    #[error("Input folder not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input path is not a folder
    #[error("Input is not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Output folder is the input folder
    #[error("Output folder must differ from the input folder: {}", .0.display())]
    SameInputOutput(PathBuf),

    /// Filesystem error outside any single file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker error (tokio runtime issues)
    #[error("Worker error: {0}")]
    Worker(String),
}
