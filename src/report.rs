// src/report.rs
// =============================================================================
// Writes the grading result as JSON.
//
// Output looks like this (4-space indent, keys sorted):
//
//   {
//       "a": false,
//       "p": true
//   }
//
// serde_json's to_string_pretty() indents with 2 spaces, so we drive the
// serializer ourselves with a PrettyFormatter configured for 4.
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::checker::ResultMap;

const INDENT: &[u8] = b"    ";

/// Renders the result map as indented JSON (no trailing newline)
pub fn to_json(results: &ResultMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the JSON report plus a newline to `out`
pub fn write_json<W: Write>(results: &ResultMap, out: &mut W) -> anyhow::Result<()> {
    let json = to_json(results)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

/// Prints the JSON report to standard output
pub fn print_json(results: &ResultMap) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(results, &mut handle)
}
