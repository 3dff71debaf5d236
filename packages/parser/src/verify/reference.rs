//! Reference table of expected Section counts per Article.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EXPECTED_ARTICLE_COUNT;
use crate::error::{ParserError, Result};
use crate::types::ArticleNumeral;

/// Expected Section counts for Articles I..XLII, in order.
///
/// Advisory only: transcribed from the agreement's table of contents and
/// not cross-checked against an independent source.
const ARTICLE_SECTION_COUNTS: [usize; EXPECTED_ARTICLE_COUNT] = [
    0, 14, 6, 6, 5, 17, 14, 3, 3, 9, // I..X
    9, 3, 3, 3, 3, 7, 5, 2, 2, 2, // XI..XX
    6, 8, 5, 9, 7, 6, 5, 8, 5, 14, // XXI..XXX
    15, 6, 16, 5, 3, 3, 3, 5, 6, 3, // XXXI..XL
    3, 4, // XLI..XLII
];

/// One row of a reference table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Roman numeral label, e.g. "VII".
    pub article: String,

    /// Expected number of Sections.
    pub sections: usize,
}

/// On-disk layout of a reference table.
#[derive(Debug, Deserialize)]
struct ReferenceFile {
    articles: Vec<ReferenceEntry>,
}

/// Mapping from Article numeral to expected Section count.
///
/// Used only to verify a parse after the fact; never drives segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<(ArticleNumeral, usize)>,
}

impl ReferenceTable {
    /// Build a table from entries, validating numerals and uniqueness.
    ///
    /// # Errors
    /// [`ParserError::InvalidReferenceTable`] for a non-canonical numeral or
    /// an Article listed twice.
    pub fn new(entries: impl IntoIterator<Item = ReferenceEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for entry in entries {
            let label = entry.article.trim();
            let numeral = ArticleNumeral::parse(label).ok_or_else(|| {
                ParserError::InvalidReferenceTable(format!(
                    "'{}' is not a Roman numeral",
                    entry.article
                ))
            })?;
            if !seen.insert(numeral.value()) {
                return Err(ParserError::InvalidReferenceTable(format!(
                    "Article {numeral} is listed more than once"
                )));
            }
            table.push((numeral, entry.sections));
        }

        Ok(Self { entries: table })
    }

    /// Parse a table from YAML.
    ///
    /// ```yaml
    /// articles:
    ///   - article: I
    ///     sections: 0
    ///   - article: II
    ///     sections: 14
    /// ```
    ///
    /// # Errors
    /// [`ParserError::InvalidReferenceTable`] if the YAML is malformed or an
    /// entry is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ReferenceFile = serde_yaml_ng::from_str(yaml)
            .map_err(|e| ParserError::InvalidReferenceTable(e.to_string()))?;
        Self::new(file.articles)
    }

    /// Load a table from a YAML file.
    ///
    /// # Errors
    /// [`ParserError::InvalidReferenceTable`] if the file cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            ParserError::InvalidReferenceTable(format!("{}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Expected Section count for an Article label.
    #[must_use]
    pub fn expected_sections(&self, article: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(numeral, _)| numeral.as_str() == article)
            .map(|(_, count)| *count)
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArticleNumeral, usize)> {
        self.entries.iter().map(|(numeral, count)| (numeral, *count))
    }

    /// Number of Articles listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table lists no Articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        create_agreement_reference_table()
    }
}

/// Built-in reference table for the 42-Article agreement.
#[must_use]
pub fn create_agreement_reference_table() -> ReferenceTable {
    let entries = (1u32..)
        .zip(ARTICLE_SECTION_COUNTS)
        .filter_map(|(value, count)| ArticleNumeral::from_value(value).map(|n| (n, count)))
        .collect();
    ReferenceTable { entries }
}
