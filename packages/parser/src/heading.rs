//! Heading resolution for Article and Section markers.

use crate::markers::{is_divider, is_marker};

/// Where a title was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleSource {
    /// On the marker line itself.
    SameLine,

    /// On a later line, which belongs to the heading and not the body.
    NextLine(usize),

    /// Nothing suitable inside the lookahead window.
    Unresolved,
}

/// A resolved heading title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Trimmed title text, empty when unresolved.
    pub title: String,

    /// Where the title came from.
    pub source: TitleSource,
}

impl Heading {
    /// First line after the heading, i.e. where body text may start.
    #[must_use]
    pub fn body_start(&self, marker_line: usize) -> usize {
        match self.source {
            TitleSource::NextLine(line) => line + 1,
            TitleSource::SameLine | TitleSource::Unresolved => marker_line + 1,
        }
    }

    /// Whether a title was found.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.source != TitleSource::Unresolved
    }
}

/// Resolve the title for the marker at `marker_line`.
///
/// A non-empty `inline_title` (text after the ordinal on the marker line)
/// wins. Otherwise the next `lookahead` lines before `limit` are scanned for
/// the first line that is neither blank nor a divider. Reaching another
/// marker ends the scan: that marker's heading is not ours.
///
/// # Examples
/// ```
/// use cba_parser::heading::{resolve_heading, TitleSource};
///
/// let lines: Vec<String> = ["Section 1.", "", "-----", "Player", "A Player is ..."]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let heading = resolve_heading(&lines, 0, None, lines.len(), 4);
///
/// assert_eq!(heading.title, "Player");
/// assert_eq!(heading.source, TitleSource::NextLine(3));
/// ```
#[must_use]
pub fn resolve_heading(
    lines: &[String],
    marker_line: usize,
    inline_title: Option<&str>,
    limit: usize,
    lookahead: usize,
) -> Heading {
    if let Some(title) = inline_title.map(str::trim).filter(|t| !t.is_empty()) {
        return Heading {
            title: title.to_string(),
            source: TitleSource::SameLine,
        };
    }

    let limit = limit.min(lines.len());
    let window_end = marker_line.saturating_add(lookahead).saturating_add(1).min(limit);

    for (line, text) in lines
        .iter()
        .enumerate()
        .take(window_end)
        .skip(marker_line + 1)
    {
        let trimmed = text.trim();
        if trimmed.is_empty() || is_divider(trimmed) {
            continue;
        }
        if is_marker(trimmed) {
            break;
        }
        return Heading {
            title: trimmed.to_string(),
            source: TitleSource::NextLine(line),
        };
    }

    Heading {
        title: String::new(),
        source: TitleSource::Unresolved,
    }
}
