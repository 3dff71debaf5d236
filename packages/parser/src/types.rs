//! Core data types: the Article/Section hierarchy and parse anomalies.

use std::fmt;

use crate::roman::{parse_roman, to_roman};

/// Half-open range of line indices `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSpan {
    /// First line (inclusive).
    pub start: usize,

    /// One past the last line.
    pub end: usize,
}

impl LineSpan {
    /// Create a span. `end` is clamped so it never precedes `start`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of lines in the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `line` falls inside the span.
    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        (self.start..self.end).contains(&line)
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lines {}..{}", self.start, self.end)
    }
}

/// Canonical Article identifier: a Roman numeral label and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleNumeral {
    value: u32,
    label: String,
}

impl ArticleNumeral {
    /// Parse a canonical Roman numeral label such as "XLII".
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        parse_roman(label).map(|value| Self {
            value,
            label: label.to_string(),
        })
    }

    /// Build a numeral from its ordinal value.
    #[must_use]
    pub fn from_value(value: u32) -> Option<Self> {
        to_roman(value).map(|label| Self { value, label })
    }

    /// Ordinal value (I = 1).
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Roman numeral label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ArticleNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A Section inside an Article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Number as printed on the marker. Not renumbered.
    pub number: u32,

    /// Heading text, empty when none could be resolved.
    pub title: String,

    /// Normalized body text.
    pub content: String,

    /// Line index of the Section marker.
    pub line: usize,
}

impl Section {
    /// Human-readable label, e.g. "Section 4".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Section {}", self.number)
    }
}

/// A top-level Article of the agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Canonical numeral.
    pub numeral: ArticleNumeral,

    /// Heading text, empty when none could be resolved.
    pub title: String,

    /// Text before the first Section, empty when below the noise threshold.
    pub intro_content: String,

    /// Sections in document order.
    pub sections: Vec<Section>,

    /// Lines owned by this Article, starting at its marker.
    pub span: LineSpan,
}

impl Article {
    /// Human-readable label, e.g. "Article VII".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Article {}", self.numeral)
    }
}

/// A structural irregularity found while parsing.
///
/// Anomalies are reported, never fatal: the hierarchy is still emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// An Article numeral seen a second time. The repeated marker is not
    /// treated as a boundary.
    DuplicateArticle { numeral: String, line: usize },

    /// An Article numeral that does not follow its predecessor.
    OutOfOrderArticle {
        numeral: String,
        previous: String,
        line: usize,
    },

    /// No title found within the lookahead window.
    UnresolvedTitle { heading: String, line: usize },

    /// A Section number repeated within one Article.
    DuplicateSection {
        article: String,
        number: u32,
        line: usize,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateArticle { numeral, line } => {
                write!(f, "line {line}: duplicate marker for Article {numeral}")
            }
            Self::OutOfOrderArticle {
                numeral,
                previous,
                line,
            } => write!(
                f,
                "line {line}: Article {numeral} follows Article {previous} out of order"
            ),
            Self::UnresolvedTitle { heading, line } => {
                write!(f, "line {line}: no title found for {heading}")
            }
            Self::DuplicateSection {
                article,
                number,
                line,
            } => write!(
                f,
                "line {line}: Section {number} appears more than once in Article {article}"
            ),
        }
    }
}

/// The parsed agreement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Agreement {
    /// Articles in document order.
    pub articles: Vec<Article>,

    /// Lines before the first Article marker, excluded from parsing.
    pub front_matter: LineSpan,

    /// Non-fatal irregularities, in detection order.
    pub anomalies: Vec<Anomaly>,
}

impl Agreement {
    /// Look up an Article by its numeral label.
    #[must_use]
    pub fn article(&self, label: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.numeral.as_str() == label)
    }

    /// Total number of emitted Sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.articles.iter().map(|a| a.sections.len()).sum()
    }
}
