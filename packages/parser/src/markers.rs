//! Marker grammar: recognises Article and Section heading lines.
//!
//! Two marker shapes exist:
//!
//! ```text
//! ARTICLE XXIX               Article marker, the line holds nothing else
//! Section 4.                 Section marker, title on a following line
//! Section 4. Player Conduct  Section marker with the title on the same line
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ArticleNumeral;

/// `ARTICLE` followed by a Roman numeral and nothing else.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*ARTICLE\s+([IVXLCDM]+)\s*$").expect("valid regex"));

/// `Section <N>.` optionally followed by title text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Section\s+(\d+)\.(?:\s+(\S.*?))?\s*$").expect("valid regex")
});

/// A line made only of repeated dash or equals characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIVIDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-=\x{2013}\x{2014}]{2,}\s*$").expect("valid regex"));

/// A recognised heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Start of an Article.
    Article(ArticleNumeral),

    /// Start of a Section, with the same-line title if present.
    Section {
        number: u32,
        inline_title: Option<String>,
    },
}

/// Classify a line as a marker.
///
/// # Examples
/// ```
/// use cba_parser::markers::{classify_line, Marker};
///
/// assert!(matches!(classify_line("ARTICLE XLII"), Some(Marker::Article(_))));
/// assert_eq!(
///     classify_line("Section 3. Player Conduct"),
///     Some(Marker::Section { number: 3, inline_title: Some("Player Conduct".to_string()) })
/// );
/// assert_eq!(classify_line("See Section 3 of Article VI."), None);
/// ```
#[must_use]
pub fn classify_line(line: &str) -> Option<Marker> {
    article_marker(line)
        .map(Marker::Article)
        .or_else(|| section_marker(line))
}

/// Parse an Article marker line.
///
/// The numeral must be canonical; `ARTICLE IIII` is not a marker.
#[must_use]
pub fn article_marker(line: &str) -> Option<ArticleNumeral> {
    let caps = ARTICLE_MARKER.captures(line)?;
    let token = caps.get(1)?.as_str();
    let numeral = ArticleNumeral::parse(token);
    if numeral.is_none() {
        tracing::debug!(token, "Ignoring ARTICLE line with non-canonical numeral");
    }
    numeral
}

fn section_marker(line: &str) -> Option<Marker> {
    let caps = SECTION_MARKER.captures(line)?;
    let number: u32 = caps.get(1)?.as_str().parse().ok()?;
    if number == 0 {
        return None;
    }
    let inline_title = caps.get(2).map(|m| m.as_str().trim().to_string());
    Some(Marker::Section {
        number,
        inline_title,
    })
}

/// Whether a line is a divider (`-----`, `=====`).
#[must_use]
pub fn is_divider(line: &str) -> bool {
    DIVIDER.is_match(line)
}

/// Whether a line is any kind of marker.
#[must_use]
pub fn is_marker(line: &str) -> bool {
    classify_line(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(number: u32, title: Option<&str>) -> Option<Marker> {
        Some(Marker::Section {
            number,
            inline_title: title.map(String::from),
        })
    }

    #[test]
    fn test_article_marker_plain() {
        let numeral = article_marker("ARTICLE VII").unwrap();
        assert_eq!(numeral.as_str(), "VII");
        assert_eq!(numeral.value(), 7);
    }

    #[test]
    fn test_article_marker_allows_surrounding_whitespace() {
        assert!(article_marker("   ARTICLE  XLII  ").is_some());
        assert!(article_marker("\tARTICLE I").is_some());
    }

    #[test]
    fn test_article_marker_rejects_extra_text() {
        assert!(article_marker("ARTICLE I DEFINITIONS").is_none());
        assert!(article_marker("ARTICLE I ..... 1").is_none());
        assert!(article_marker("Article I").is_none());
        assert!(article_marker("ARTICLE 1").is_none());
        assert!(article_marker("ARTICLES").is_none());
    }

    #[test]
    fn test_article_marker_rejects_non_canonical_numeral() {
        assert!(article_marker("ARTICLE IIII").is_none());
        assert!(article_marker("ARTICLE IC").is_none());
    }

    #[test]
    fn test_section_marker_ordinal_only() {
        assert_eq!(classify_line("Section 1."), section(1, None));
        assert_eq!(classify_line("  Section 12.   "), section(12, None));
    }

    #[test]
    fn test_section_marker_same_line_title() {
        assert_eq!(
            classify_line("Section 3. Player Conduct"),
            section(3, Some("Player Conduct"))
        );
        assert_eq!(
            classify_line("Section 2.   Team  "),
            section(2, Some("Team"))
        );
    }

    #[test]
    fn test_section_marker_rejects_references_and_zero() {
        assert_eq!(classify_line("Section 3 of this Article"), None);
        assert_eq!(classify_line("pursuant to Section 3. above"), None);
        assert_eq!(classify_line("Section 0."), None);
        assert_eq!(classify_line("Section 99999999999."), None);
        assert_eq!(classify_line("SECTION 1."), None);
    }

    #[test]
    fn test_is_divider() {
        assert!(is_divider("-----"));
        assert!(is_divider("  ====== "));
        assert!(is_divider("-=-=-="));
        assert!(is_divider("\u{2014}\u{2014}\u{2014}"));
        assert!(!is_divider("-"));
        assert!(!is_divider(""));
        assert!(!is_divider("--- text ---"));
    }

    #[test]
    fn test_is_marker() {
        assert!(is_marker("ARTICLE II"));
        assert!(is_marker("Section 5."));
        assert!(!is_marker("PLAYER CONTRACTS"));
    }
}
