// src/checklist.rs
// =============================================================================
// Loads the list of selectors a document is graded against.
//
// The checklist file is a plain JSON array of strings:
//
//   ["h1", "a[href]", "#myId", ".nav li"]
//
// Selectors are sorted right after loading. Nothing depends on the order
// for matching; sorting only makes the report come out the same every run.
// =============================================================================

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GraderError, Result};

/// The sorted list of selectors to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    selectors: Vec<String>,
}

impl Checklist {
    /// Builds a checklist from any list of selectors, sorting it
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort();
        Checklist { selectors }
    }

    /// Reads and parses a checklist file
    ///
    /// The caller is expected to have checked that the file exists; a read
    /// failure here is reported as `GraderError::Io`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GraderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let checklist = Checklist::from_json_str(&text).map_err(|source| GraderError::ChecklistParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), count = checklist.len(), "loaded checklist");
        Ok(checklist)
    }

    /// Parses a JSON array of selector strings
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let selectors: Vec<String> = serde_json::from_str(text)?;
        Ok(Checklist::new(selectors))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
