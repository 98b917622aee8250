// src/lib.rs
// =============================================================================
// html-grader checks an HTML document for a list of expected CSS selectors
// and reports which ones are present.
//
// Flow:
//   checklist file ──> Checklist ─┐
//                                 ├─> check_presence ──> ResultMap ──> JSON
//   file / URL ──> markup ──> ParsedDocument ─┘
//
// The binary (src/main.rs) is a thin wrapper: parse options, build a Config,
// call into this library, print the result.
// =============================================================================

pub mod checker;
pub mod checklist;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod report;

pub use checker::{check_html_file, check_presence, check_source, check_url, ResultMap};
pub use checklist::Checklist;
pub use config::Config;
pub use document::{ParsedDocument, SelectorQuery};
pub use error::{GraderError, Result};
pub use loader::Source;
