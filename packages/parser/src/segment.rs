//! Article segmentation: splits the document into one line span per Article.
//!
//! Boundaries are found by pattern only. Every Article owns the lines from
//! its marker up to (not including) the next boundary marker; the last one
//! runs to the end of the document. Lines before the first marker are front
//! matter and belong to no Article.

use crate::markers::article_marker;
use crate::source::Document;
use crate::types::{Anomaly, ArticleNumeral, LineSpan};

/// One Article's slice of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSpan {
    /// Numeral from the marker line.
    pub numeral: ArticleNumeral,

    /// Lines owned by the Article; `span.start` is the marker line.
    pub span: LineSpan,
}

/// Result of segmenting a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmentation {
    /// Lines before the first Article marker.
    pub front_matter: LineSpan,

    /// Article spans in document order.
    pub articles: Vec<ArticleSpan>,

    /// Duplicate and out-of-order numerals.
    pub anomalies: Vec<Anomaly>,
}

impl Segmentation {
    /// The Article span that owns `line`, if any.
    #[must_use]
    pub fn owner_of(&self, line: usize) -> Option<&ArticleSpan> {
        // Spans are sorted and disjoint.
        let idx = self.articles.partition_point(|a| a.span.end <= line);
        self.articles.get(idx).filter(|a| a.span.contains(line))
    }

    /// Total number of lines claimed by Articles.
    #[must_use]
    pub fn covered_lines(&self) -> usize {
        self.articles.iter().map(|a| a.span.len()).sum()
    }
}

/// Locate every Article boundary in document order.
///
/// Numerals are expected to increase strictly. A numeral that has already
/// been seen is reported as a duplicate and its line stays in the current
/// Article; a numeral lower than its predecessor (but unseen) is reported as
/// out of order and still opens a new Article.
///
/// # Examples
/// ```
/// use cba_parser::segment::segment_articles;
/// use cba_parser::source::Document;
///
/// let doc = Document::from_text("CONTENTS\nARTICLE I\nDEFINITIONS\nARTICLE II\nCONTRACTS");
/// let segmentation = segment_articles(&doc);
///
/// assert_eq!(segmentation.front_matter.len(), 1);
/// assert_eq!(segmentation.articles.len(), 2);
/// assert_eq!(segmentation.articles[1].span.start, 3);
/// ```
#[must_use]
pub fn segment_articles(doc: &Document) -> Segmentation {
    let mut boundaries: Vec<(usize, ArticleNumeral)> = Vec::new();
    let mut anomalies = Vec::new();

    for (line, text) in doc.lines().iter().enumerate() {
        let Some(numeral) = article_marker(text) else {
            continue;
        };

        if boundaries.iter().any(|(_, seen)| *seen == numeral) {
            tracing::warn!(
                line,
                numeral = %numeral,
                "Duplicate Article marker, keeping it inside the preceding Article"
            );
            anomalies.push(Anomaly::DuplicateArticle {
                numeral: numeral.to_string(),
                line,
            });
            continue;
        }

        if let Some((_, previous)) = boundaries.last() {
            if numeral.value() <= previous.value() {
                tracing::warn!(
                    line,
                    numeral = %numeral,
                    previous = %previous,
                    "Article marker out of order, continuing in document order"
                );
                anomalies.push(Anomaly::OutOfOrderArticle {
                    numeral: numeral.to_string(),
                    previous: previous.to_string(),
                    line,
                });
            }
        }

        boundaries.push((line, numeral));
    }

    let front_end = boundaries.first().map_or(doc.len(), |(line, _)| *line);

    let articles: Vec<ArticleSpan> = boundaries
        .iter()
        .enumerate()
        .map(|(i, (start, numeral))| {
            let end = boundaries.get(i + 1).map_or(doc.len(), |(next, _)| *next);
            ArticleSpan {
                numeral: numeral.clone(),
                span: LineSpan::new(*start, end),
            }
        })
        .collect();

    tracing::debug!(
        articles = articles.len(),
        front_matter_lines = front_end,
        "Segmented document"
    );

    Segmentation {
        front_matter: LineSpan::new(0, front_end),
        articles,
        anomalies,
    }
}
