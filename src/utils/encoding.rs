//! Strict UTF-8 file reading.
//!
//! Sources are decoded strictly: there is no encoding detection and no
//! replacement characters. Line endings are normalized the way a text-mode read
//! does it, so `\r\n` and lone `\r` both become `\n`. A UTF-8 byte order mark
//! is kept as U+FEFF.

use crate::error::{MergeError, Result};
use std::fs;
use std::path::Path;

/// Read the whole file at `path` as UTF-8 text.
///
/// # Errors
/// * [`MergeError::Access`] if the file cannot be opened or read
/// * [`MergeError::Decode`] if the bytes are not valid UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|source| MergeError::Access { path: path.to_path_buf(), source })?;
    let text = String::from_utf8(bytes)
        .map_err(|source| MergeError::Decode { path: path.to_path_buf(), source })?;
    Ok(normalize_newlines(text))
}

/// Translate `\r\n` and bare `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_returns_full_content() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("main.dart");
        fs::write(&path, "void main() {\n  print('héllo');\n}").expect("write");

        let content = read_source(&path).expect("read");
        assert_eq!(content, "void main() {\n  print('héllo');\n}");
    }

    #[test]
    fn test_read_source_normalizes_line_endings() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("crlf.dart");
        fs::write(&path, "a\r\nb\rc\n").expect("write");

        assert_eq!(read_source(&path).expect("read"), "a\nb\nc\n");
    }

    #[test]
    fn test_read_source_keeps_byte_order_mark() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bom.dart");
        fs::write(&path, b"\xef\xbb\xbfclass A {}").expect("write");

        assert_eq!(read_source(&path).expect("read"), "\u{feff}class A {}");
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("latin1.dart");
        fs::write(&path, b"// caf\xe9\n").expect("write");

        let err = read_source(&path).expect_err("latin-1 bytes must not decode");
        assert!(matches!(err, MergeError::Decode { .. }), "got: {err:?}");
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_read_source_reports_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("gone.dart");

        let err = read_source(&path).expect_err("missing file");
        assert!(matches!(err, MergeError::Access { .. }), "got: {err:?}");
    }

    #[test]
    fn test_normalize_newlines_leaves_unix_text_alone() {
        assert_eq!(normalize_newlines("x\ny\n".to_string()), "x\ny\n");
        assert_eq!(normalize_newlines(String::new()), "");
    }
}
