//! Conversion between files and line sequences.
//!
//! Lines are handled without separators. The separator style and whether the
//! file ends with a newline are kept in a [`TextLayout`] so a rewritten file
//! keeps the bytes outside its workflow areas.

use crate::error::{Result, SyncError};
use std::path::Path;

/// Line separator style of a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    /// Lines end with `\r\n` instead of `\n`.
    pub crlf: bool,
    /// The last line is followed by a separator.
    pub final_newline: bool,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            crlf: false,
            final_newline: true,
        }
    }
}

impl TextLayout {
    /// Layout of `content`. The first separator decides between `\n` and `\r\n`.
    pub fn detect(content: &str) -> Self {
        let crlf = content
            .find('\n')
            .is_some_and(|idx| content[..idx].ends_with('\r'));

        Self {
            crlf,
            final_newline: content.ends_with('\n'),
        }
    }

    fn separator(self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }
}

/// A file split into lines, with the layout needed to write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub lines: Vec<String>,
    pub layout: TextLayout,
}

impl TextFile {
    /// Split `content` into lines and record its layout.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: split_lines(content),
            layout: TextLayout::detect(content),
        }
    }
}

/// Read a file as lines plus its layout.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<TextFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| SyncError::IoError(format!("failed to read '{}': {}", path.display(), e)))?;

    Ok(TextFile::parse(&content))
}

/// Like [`read_text`], but a missing file yields `Ok(None)`.
pub fn read_text_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<TextFile>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    read_text(path).map(Some)
}

/// Read a file as a list of lines without separators.
///
/// Both `\n` and `\r\n` endings are accepted. A trailing newline does not
/// produce an extra empty line.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    read_text(path).map(|text| text.lines)
}

/// Split text into lines.
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(String::from).collect()
}

/// Join lines back into file content using `layout`.
///
/// An empty line list yields an empty string.
pub fn join_lines(lines: &[String], layout: TextLayout) -> String {
    let separator = layout.separator();
    let mut out = lines.join(separator);
    if layout.final_newline && !lines.is_empty() {
        out.push_str(separator);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CRLF_NO_FINAL: TextLayout = TextLayout {
        crlf: true,
        final_newline: false,
    };

    #[test]
    fn test_split_and_join() {
        let lines = split_lines("a\n\nb\n");
        assert_eq!(lines, vec!["a", "", "b"]);
        assert_eq!(join_lines(&lines, TextLayout::default()), "a\n\nb\n");
    }

    #[test]
    fn test_split_crlf() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_lines(&[], TextLayout::default()), "");
        assert_eq!(join_lines(&[], CRLF_NO_FINAL), "");
    }

    #[test]
    fn test_detect_layout() {
        assert_eq!(TextLayout::detect("a\nb\n"), TextLayout::default());
        assert_eq!(TextLayout::detect("a\r\nb"), CRLF_NO_FINAL);
        assert_eq!(
            TextLayout::detect("a\r\nb\n"),
            TextLayout {
                crlf: true,
                final_newline: true
            }
        );
        assert!(!TextLayout::detect("").final_newline);
    }

    #[test]
    fn test_parse_then_join_keeps_bytes() {
        for content in ["a\r\n\r\nb", "a\r\nb\r\n", "a\nb", "\n", "x"] {
            let text = TextFile::parse(content);
            assert_eq!(join_lines(&text.lines, text.layout), content, "{:?}", content);
        }
    }

    #[test]
    fn test_read_text_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");

        assert!(read_text_if_exists(&path).unwrap().is_none());

        std::fs::write(&path, "x\r\ny").unwrap();
        let text = read_text_if_exists(&path).unwrap().unwrap();
        assert_eq!(text.lines, vec!["x", "y"]);
        assert_eq!(text.layout, CRLF_NO_FINAL);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_lines(temp_dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, SyncError::IoError(_)));
    }
}
