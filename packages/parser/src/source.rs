//! Line source: loads the agreement text as an ordered list of lines.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::error::{ParserError, Result};
use crate::types::LineSpan;

/// The full agreement text, one entry per physical line.
///
/// Line numbers are 0-indexed positions in [`Document::lines`]. The
/// document is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    path: Option<PathBuf>,
}

impl Document {
    /// Build a document from in-memory text.
    ///
    /// Accepts LF and CRLF line endings. A leading byte-order mark is
    /// dropped and every line is NFKC-normalized, so non-breaking spaces
    /// and ligatures from PDF extraction read as plain ASCII.
    ///
    /// # Examples
    /// ```
    /// use cba_parser::source::Document;
    ///
    /// let doc = Document::from_text("ARTICLE I\r\nDEFINITIONS\r\n");
    /// assert_eq!(doc.len(), 2);
    /// assert_eq!(doc.line(1), Some("DEFINITIONS"));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines = text.lines().map(|line| line.nfkc().collect()).collect();
        Self { lines, path: None }
    }

    /// Load a document from disk.
    ///
    /// # Errors
    /// * [`ParserError::NotFound`] if nothing exists at `path`
    /// * [`ParserError::ReadDocument`] for any other read failure
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ParserError::NotFound(path.to_path_buf())
            } else {
                ParserError::ReadDocument {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let text = decode(&bytes, path);
        let mut doc = Self::from_text(&text);
        doc.path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), lines = doc.len(), "Loaded document");
        Ok(doc)
    }

    /// All lines in document order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single line by index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The lines covered by `span`, clamped to the document.
    #[must_use]
    pub fn slice(&self, span: LineSpan) -> &[String] {
        let end = span.end.min(self.lines.len());
        let start = span.start.min(end);
        &self.lines[start..end]
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Path the document was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Decode file bytes, falling back to lossy conversion for invalid UTF-8.
fn decode(bytes: &[u8], path: &Path) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                valid_up_to = e.valid_up_to(),
                "Document is not valid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
