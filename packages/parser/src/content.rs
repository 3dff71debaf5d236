//! Content accumulation for Section bodies and Article intros.

use crate::markers::{is_divider, is_marker};

/// Collects the body lines of one region (a Section or an Article intro).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffer {
    lines: Vec<String>,
}

impl ContentBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    ///
    /// Markers and dividers are skipped. Kept lines lose their outer
    /// whitespace; inner spacing stays as is.
    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if is_divider(trimmed) || is_marker(trimmed) {
            return;
        }
        self.lines.push(trimmed.to_string());
    }

    /// Whether anything has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    /// Join the collected lines into one block.
    ///
    /// Lines are joined with `\n`. A run of blank lines becomes a single
    /// empty line, so paragraphs stay apart. Returns `None` when the block
    /// is shorter than `min_len` characters.
    ///
    /// # Examples
    /// ```
    /// use cba_parser::content::ContentBuffer;
    ///
    /// let mut buffer = ContentBuffer::new();
    /// buffer.push("  A Player is any person  ");
    /// buffer.push("under contract.");
    /// buffer.push("");
    /// buffer.push("");
    /// buffer.push("A Team is a member club.");
    /// assert_eq!(
    ///     buffer.finish(10).as_deref(),
    ///     Some("A Player is any person\nunder contract.\n\nA Team is a member club.")
    /// );
    /// ```
    #[must_use]
    pub fn finish(self, min_len: usize) -> Option<String> {
        let mut kept: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            if line.is_empty() && kept.last().is_none_or(String::is_empty) {
                continue;
            }
            kept.push(line);
        }
        let text = kept.join("\n");
        let text = text.trim();

        if text.chars().count() < min_len {
            tracing::trace!(len = text.len(), min_len, "Dropping short content block");
            return None;
        }
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> ContentBuffer {
        let mut buffer = ContentBuffer::new();
        for line in lines {
            buffer.push(line);
        }
        buffer
    }

    #[test]
    fn test_finish_trims_and_collapses_blank_lines() {
        let buffer = buffer(&["", "   First line.  ", "", "", "\tSecond   line.", ""]);
        assert_eq!(
            buffer.finish(10).as_deref(),
            Some("First line.\n\nSecond   line.")
        );
    }

    #[test]
    fn test_finish_keeps_paragraph_lines_together() {
        let buffer = buffer(&["Para one line.", "", "Para two line.", "still para two."]);
        assert_eq!(
            buffer.finish(10).as_deref(),
            Some("Para one line.\n\nPara two line.\nstill para two.")
        );
    }

    #[test]
    fn test_divider_between_paragraphs_leaves_one_break() {
        let buffer = buffer(&["Para one line.", "", "-----", "", "Para two line."]);
        assert_eq!(
            buffer.finish(10).as_deref(),
            Some("Para one line.\n\nPara two line.")
        );
    }

    #[test]
    fn test_push_skips_dividers_and_markers() {
        let buffer = buffer(&["-------", "Body text here.", "=====", "Section 4.", "ARTICLE V"]);
        assert_eq!(buffer.finish(0).as_deref(), Some("Body text here."));
    }

    #[test]
    fn test_finish_drops_short_content() {
        assert_eq!(buffer(&["short"]).finish(10), None);
        assert_eq!(buffer(&["", "   "]).finish(10), None);
        assert_eq!(buffer(&["exactly10!"]).finish(10).as_deref(), Some("exactly10!"));
    }

    #[test]
    fn test_finish_counts_characters_not_bytes() {
        // Five characters, ten bytes.
        assert_eq!(buffer(&["ééééé"]).finish(6), None);
        assert!(buffer(&["ééééé"]).finish(5).is_some());
    }

    #[test]
    fn test_is_empty() {
        assert!(ContentBuffer::new().is_empty());
        assert!(buffer(&["", "----"]).is_empty());
        assert!(!buffer(&["text"]).is_empty());
    }
}
