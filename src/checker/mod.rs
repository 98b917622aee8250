// src/checker/mod.rs
// =============================================================================
// This module ties loading, parsing and checking together.
//
// Submodules:
// - presence: tests each selector against a parsed document
//
// The two public entry points are what other programs call when they want
// to grade a document without going through the CLI:
// - check_html_file: grade a file on disk
// - check_url: grade a page fetched over HTTP
//
// Rust concepts:
// - Modules: mod.rs is the root of the checker/ directory
// - pub use: Re-export items so callers write `checker::check_presence`
// - async fn: only the URL path needs to wait on the network
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod presence;

use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::checklist::Checklist;
use crate::document::ParsedDocument;
use crate::error::Result;
use crate::loader::{self, Source};

// Re-export the checking step and its result type
pub use presence::{check_presence, ResultMap};

/// Grades a local HTML file against the checklist at `checks_path`
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<ResultMap> {
    // Load the selectors first; they are sorted on the way in
    let checklist = Checklist::load(checks_path)?;

    // Read the raw markup and build a queryable DOM from it
    let markup = loader::read_html_file(html_path)?;
    let document = ParsedDocument::parse(&markup);

    // Test every selector against the document
    check_presence(&document, &checklist)
}

/// Fetches `url` and grades it against the checklist at `checks_path`
///
/// The checklist is loaded before the request goes out, so a broken
/// checklist fails fast without touching the network.
pub async fn check_url(url: &Url, checks_path: &Path, timeout: Duration) -> Result<ResultMap> {
    let checklist = Checklist::load(checks_path)?;

    // The only .await in the whole grading flow
    let markup = loader::fetch_html(url, timeout).await?;

    // Parse after the await: the parsed document never has to live across
    // a suspension point
    let document = ParsedDocument::parse(&markup);
    check_presence(&document, &checklist)
}

/// Grades whichever `source` the caller picked
pub async fn check_source(source: &Source, checks_path: &Path, timeout: Duration) -> Result<ResultMap> {
    // match on the enum: the compiler makes sure both kinds are handled
    match source {
        Source::File(path) => check_html_file(path, checks_path),
        Source::Url(url) => check_url(url, checks_path, timeout).await,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is check_html_file not async?
//    - Reading a small local file is quick and blocking is fine here
//    - check_source is async only because one of its branches is
//
// 2. Why return Result<ResultMap> instead of taking a callback?
//    - The caller decides what to do with the result (print it, store it)
//    - Errors travel back the same way, through the ? operator
// -----------------------------------------------------------------------------
