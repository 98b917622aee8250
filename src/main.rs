// src/main.rs
// =============================================================================
// This is the entry point of the grader CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn them into a Config (this is where missing files are caught)
// 3. Grade the file or URL and print the JSON report
// 4. Exit with proper code (0 = success, 1 = missing input file, 2 = error)
//
// Diagnostics go to stderr through tracing; stdout only ever carries the
// JSON report, so the output can be piped straight into another tool.
//
// Rust concepts used:
// - async/await: the URL mode waits on a network request
// - Result<T, E> and the ? operator: errors flow up to main() in one place
// - downcast_ref: recover our own error type from an anyhow::Error
// - match guards: `Some(err) if ...` picks a branch based on a condition
// =============================================================================

// Parser trait enables the parse() method on our Cli struct
use clap::Parser;

// The pieces of tracing-subscriber we need to build a logger:
// - fmt: formats events as human-readable lines
// - prelude: brings the .with() method for stacking layers
// - EnvFilter: decides which events are shown (e.g. "warn", "html_grader=debug")
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Everything else comes from our own library crate (src/lib.rs)
use html_grader::cli::Cli;
use html_grader::{check_source, report, Config, GraderError};

// anyhow::Result lets run() bubble up both our GraderError and I/O errors
// from printing the report
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version and bad flags
    let cli = Cli::parse();

    // Set up logging before anything else so every step can report itself
    init_logging(cli.verbose);

    // Run our application logic and turn the outcome into an exit code
    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<GraderError>() {
            // A missing input gets the short message on stdout, like a usage error
            Some(err) if matches!(err, GraderError::MissingFile { .. }) => {
                println!("{}", err);
                err.exit_code()
            }
            // Any other grader error: explain on stderr, keep stdout empty
            Some(err) => {
                eprintln!("Error: {}", err);
                err.exit_code()
            }
            // Not one of ours (e.g. stdout was closed while printing)
            None => {
                eprintln!("Error: {:#}", e);
                2
            }
        },
    };

    // std::process::exit() terminates the program with the given code
    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(())  = report printed
//   Err(..) = something stopped us; main() picks the exit code
async fn run(cli: Cli) -> Result<()> {
    // Validate the options once and freeze them
    // A missing checks or HTML file is reported right here
    let config = Config::from_cli(cli)?;

    // Load the checklist and the document, then test every selector
    let results = check_source(&config.source, &config.checks, config.timeout).await?;
    tracing::info!(
        checked = results.len(),
        all_present = results.all_present(),
        "grading finished"
    );

    // The only thing that ever goes to stdout on success
    report::print_json(&results)?;
    Ok(())
}

// Installs the global tracing subscriber, writing to stderr
fn init_logging(verbose: bool) {
    // Read RUST_LOG ourselves so the choice of filter is a plain function
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// Picks the log filter:
//   RUST_LOG set   -> use it as-is (even with --verbose)
//   --verbose      -> everything from this crate at debug level
//   otherwise      -> warnings only
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ if verbose => EnvFilter::new("html_grader=debug"),
        _ => EnvFilter::new("warn"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is most of the code in src/lib.rs and not here?
//    - A binary can't be imported by other programs or by tests/ files
//    - Keeping the logic in the library lets both use it
//    - main.rs only deals with the process: arguments, logging, exit codes
//
// 2. Why print diagnostics to stderr?
//    - stdout is reserved for the JSON report
//    - `html-grader | jq .` keeps working even with --verbose
//
// 3. What does {:#} do for an anyhow::Error?
//    - It prints the error together with its chain of causes on one line
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_over_verbose() {
        assert_eq!(log_filter(true, Some("off")).to_string(), "off");
        assert_eq!(log_filter(false, Some("html_grader=trace")).to_string(), "html_grader=trace");
    }

    #[test]
    fn test_verbose_without_rust_log() {
        assert_eq!(log_filter(true, None).to_string(), "html_grader=debug");
        assert_eq!(log_filter(true, Some("")).to_string(), "html_grader=debug");
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
    }
}
