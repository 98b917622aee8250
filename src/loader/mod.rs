// src/loader/mod.rs
// =============================================================================
// Produces raw HTML text from wherever the document lives.
//
// Submodules:
// - file: reads a document from the local filesystem
// - http: fetches a document with a single HTTP GET
// =============================================================================

mod file;
mod http;

use std::path::PathBuf;

use url::Url;

pub use file::read_html_file;
pub use http::fetch_html;

/// Where the document to grade comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}
