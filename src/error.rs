// src/error.rs
// =============================================================================
// Error type shared by every part of the grader.
//
// The library returns `GraderError` so callers can tell a missing input file
// (a user mistake, exit code 1) apart from everything else (exit code 2).
// The binary still uses anyhow at the top level and downcasts when it needs
// to pick the exit code.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraderError>;

#[derive(Error, Debug)]
pub enum GraderError {
    /// A required input file is not on disk
    #[error("{} does not exist. Exiting.", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The checklist file is not a JSON array of strings
    #[error("invalid checklist {}: {source}", path.display())]
    ChecklistParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("timed out after {}s fetching {url}", timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

impl GraderError {
    /// Process exit code for this error
    ///
    /// 1 = a required input file is missing, 2 = anything else
    pub fn exit_code(&self) -> i32 {
        match self {
            GraderError::MissingFile { .. } => 1,
            _ => 2,
        }
    }
}
