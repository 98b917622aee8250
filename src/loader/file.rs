// src/loader/file.rs
// =============================================================================
// Reads an HTML document from disk.
//
// Existence is checked once while the options are turned into a Config, so
// by the time we get here a failure is a real I/O problem (permissions, a
// directory instead of a file, ...).
// =============================================================================

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GraderError, Result};

/// Reads the whole file as text
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// HTML parser is forgiving and so is this.
pub fn read_html_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| GraderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read html file");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<h1>Hello</h1>").unwrap();

        assert_eq!(read_html_file(&path).unwrap(), "<h1>Hello</h1>");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, b"<p>caf\xe9</p>").unwrap();

        let html = read_html_file(&path).unwrap();
        assert!(html.starts_with("<p>caf"));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_html_file(dir.path()).unwrap_err();
        assert!(matches!(err, GraderError::Io { .. }));
    }
}
