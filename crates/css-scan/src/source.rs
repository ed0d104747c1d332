//! Loading stylesheet text.

use crate::ScanError;
use std::fs;
use std::path::Path;

/// Reads a stylesheet into memory, decodes it as UTF-8 and normalizes line
/// endings.
///
/// The file is read in full before any scanning starts; the handle is closed
/// before this function returns, whether or not the read succeeded.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ScanError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read stylesheet");

    let text = String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(text))
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scan, LineWindow, ScanOptions};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn read_bytes(bytes: &[u8]) -> String {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        read_source(file.path()).unwrap()
    }

    #[test]
    fn test_read_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ".a {{ color: red; }}").unwrap();

        let text = read_source(file.path()).unwrap();
        assert_eq!(text, ".a { color: red; }\n");
    }

    #[test]
    fn test_crlf_becomes_lf() {
        let text = read_bytes(b"ab\r\ncd\r\n");
        assert_eq!(text, "ab\ncd\n");

        let options = ScanOptions::default().with_window(LineWindow::new(1, 1).unwrap());
        let report = scan(&text, &options);
        assert_eq!(report.diagnostics[0].message, r"Content at root L1: ab\ncd\n");
    }

    #[test]
    fn test_lone_cr_starts_a_line() {
        let text = read_bytes(b"a{}\r;");
        assert_eq!(text, "a{}\n;");

        let report = scan(&text, &ScanOptions::default());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].message, "Suspicious semicolon at line 2");
    }

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(normalize_newlines("a\r\r\nb\rc\n".to_string()), "a\n\nb\nc\n");
        assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.css");

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, ScanError::Read { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'.', b'a', 0xff, 0xfe]).unwrap();

        let err = read_source(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::Decode { .. }));
    }
}
