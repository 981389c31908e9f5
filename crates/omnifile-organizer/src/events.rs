//! Progress events sent from the batch worker to whoever owns the display

use crate::BatchReport;
use omnifile_domain::ClassificationResult;
use std::fmt;
use std::path::PathBuf;

/// Steps of the per-file pipeline that can fail
///
/// Classification, name validation and sanitizing always produce a value
/// (errors there degrade to the keyword fallback), so they have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading a text excerpt
    Extract,
    /// Finding a free destination path
    ResolveCollision,
    /// Copying the file
    Copy,
}

impl Stage {
    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::ResolveCollision => "resolve-collision",
            Stage::Copy => "copy",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where one file ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Original file (left untouched)
    pub source: PathBuf,

    /// Copy location (not created in dry-run mode)
    pub destination: PathBuf,

    /// Category and proposed name before sanitization
    pub classification: ClassificationResult,

    /// Whether the copy was skipped
    pub dry_run: bool,
}

/// Progress of a batch, in order of occurrence
#[derive(Debug, Clone)]
pub enum OrganizerEvent {
    /// Files were discovered and processing begins
    BatchStarted {
        /// Files to process
        total: usize,
    },

    /// Processing of one file begins
    FileStarted {
        /// 1-based position in the batch
        index: usize,
        /// Files in the batch
        total: usize,
        /// File being processed
        path: PathBuf,
    },

    /// A file was classified and copied
    FileOrganized {
        /// 1-based position in the batch
        index: usize,
        /// Files in the batch
        total: usize,
        /// Outcome
        placement: Placement,
    },

    /// A file could not be organized; the batch continues
    FileFailed {
        /// 1-based position in the batch
        index: usize,
        /// Files in the batch
        total: usize,
        /// File that failed
        path: PathBuf,
        /// Stage that failed
        stage: Stage,
        /// Error chain, outermost first
        error: String,
    },

    /// Every file has been processed
    BatchFinished(BatchReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Extract.to_string(), "extract");
        assert_eq!(Stage::ResolveCollision.to_string(), "resolve-collision");
        assert_eq!(Stage::Copy.as_str(), "copy");
    }
}
