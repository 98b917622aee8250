// src/config.rs
// =============================================================================
// Run configuration, built once from the command line and then only read.
//
// This is also where the pre-flight checks live: a checklist or HTML file
// that does not exist is reported here, before anything is loaded, so the
// binary can print a short message and exit with code 1.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::cli::Cli;
use crate::error::{GraderError, Result};
use crate::loader::Source;

pub const DEFAULT_HTML_FILE: &str = "index.html";
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the checklist file (known to exist)
    pub checks: PathBuf,
    /// Document to grade
    pub source: Source,
    /// Upper bound for the HTTP fetch in URL mode
    pub timeout: Duration,
}

impl Config {
    /// Validates the parsed options and freezes them into a Config
    ///
    /// The checks file must exist. The HTML file must exist when we are in
    /// file mode, and also whenever `--file` was given explicitly, even if
    /// `--url` takes precedence.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let checks = assert_file_exists(cli.checks)?;

        let explicit_file = match cli.file {
            Some(path) => Some(assert_file_exists(path)?),
            None => None,
        };

        let source = match cli.url {
            Some(url) => Source::Url(url),
            None => {
                let path = match explicit_file {
                    Some(path) => path,
                    None => assert_file_exists(PathBuf::from(DEFAULT_HTML_FILE))?,
                };
                Source::File(path)
            }
        };

        let config = Config {
            checks,
            source,
            timeout: Duration::from_secs(cli.timeout),
        };
        debug!(?config, "configuration ready");
        Ok(config)
    }
}

fn assert_file_exists(path: PathBuf) -> Result<PathBuf> {
    if Path::exists(&path) {
        Ok(path)
    } else {
        Err(GraderError::MissingFile { path })
    }
}
