// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using a
// Rust struct and attributes. Every option can also be set through an
// environment variable (the `env` feature of clap), which is handy when the
// grader runs inside a CI job.
//
// The parsed `Cli` is never passed around directly: it is converted once
// into a `Config` (see config.rs), which is what the rest of the program
// reads.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate the parsing code for our struct
// - Option<T>: a flag that may or may not have been given
// =============================================================================

use std::path::PathBuf;

use clap::Parser;
use url::Url;

// Defaults live next to the Config that uses them
use crate::config::{DEFAULT_CHECKS_FILE, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure --help and --version
// Doc comments (///) on each field become the help text for that flag
#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Check an HTML document for the presence of expected CSS selectors",
    long_about = "html-grader loads an HTML document from a file or a URL, tests every selector \
                  in a JSON checklist against it, and prints selector -> true/false as JSON."
)]
pub struct Cli {
    /// Checklist file: a JSON array of CSS selectors
    // `short, long` creates both -c and --checks from the field name
    #[arg(
        short,
        long,
        value_name = "CHECK_FILE",
        env = "HTML_GRADER_CHECKS",
        default_value = DEFAULT_CHECKS_FILE
    )]
    pub checks: PathBuf,

    /// HTML file to grade (default: index.html)
    // Left as an Option so we can tell "given on the command line" apart
    // from "use the default"
    #[arg(short, long, value_name = "HTML_FILE", env = "HTML_GRADER_FILE")]
    pub file: Option<PathBuf>,

    /// URL of a page to grade instead of a local file
    // value_parser runs our own check, so a bad URL is a usage error
    #[arg(short, long, env = "HTML_GRADER_URL", value_parser = parse_http_url)]
    pub url: Option<Url>,

    /// Seconds to wait for the page when --url is used (at least 1)
    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Print debug diagnostics to stderr
    // A plain bool field becomes an on/off flag: -v or --verbose
    #[arg(short, long)]
    pub verbose: bool,
}

// Turns the --url string into a Url
//
// Only http and https make sense for a GET request, so anything else
// (ftp:, file:, mailto:, ...) is rejected before the program runs.
// The String error is shown by clap next to the offending flag.
fn parse_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported URL scheme '{}' (expected http or https)", other)),
    }
}
