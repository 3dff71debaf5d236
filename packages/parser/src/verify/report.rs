//! Verification report types.

use std::fmt;

use crate::types::Anomaly;

/// Outcome of comparing one Article against the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Parsed count equals the expected count.
    Match,

    /// Both counts known, but they differ.
    Mismatch,

    /// Listed in the table, not found in the document.
    Missing,

    /// Found in the document, not listed in the table.
    Unlisted,
}

impl CheckStatus {
    /// Short lower-case name for report output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Missing => "missing",
            Self::Unlisted => "unlisted",
        }
    }
}

/// Expected vs. actual Section count for one Article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCheck {
    /// Roman numeral label.
    pub article: String,

    /// Count from the reference table.
    pub expected: Option<usize>,

    /// Count produced by the parser.
    pub actual: Option<usize>,
}

impl ArticleCheck {
    /// Classify the check.
    #[must_use]
    pub fn status(&self) -> CheckStatus {
        match (self.expected, self.actual) {
            (Some(e), Some(a)) if e == a => CheckStatus::Match,
            (Some(_), Some(_)) => CheckStatus::Mismatch,
            (Some(_), None) => CheckStatus::Missing,
            (None, _) => CheckStatus::Unlisted,
        }
    }
}

impl fmt::Display for ArticleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = self.expected.unwrap_or_default();
        let actual = self.actual.unwrap_or_default();
        match self.status() {
            CheckStatus::Match => write!(f, "Article {}: {actual} sections", self.article),
            CheckStatus::Mismatch => write!(
                f,
                "Article {}: expected {expected} sections, found {actual}",
                self.article
            ),
            CheckStatus::Missing => write!(
                f,
                "Article {}: expected {expected} sections, Article not found",
                self.article
            ),
            CheckStatus::Unlisted => write!(
                f,
                "Article {}: {actual} sections, not in reference table",
                self.article
            ),
        }
    }
}

/// Full verification result for a parsed agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// One check per Article, table order first, then unlisted Articles.
    pub checks: Vec<ArticleCheck>,

    /// Number of Articles the parser produced.
    pub articles_found: usize,

    /// Number of Articles in the reference table.
    pub articles_expected: usize,

    /// Anomalies recorded during parsing.
    pub anomalies: Vec<Anomaly>,
}

impl VerificationReport {
    /// Checks whose status is not [`CheckStatus::Match`].
    pub fn discrepancies(&self) -> impl Iterator<Item = &ArticleCheck> {
        self.checks
            .iter()
            .filter(|c| c.status() != CheckStatus::Match)
    }

    /// Whether the Article total equals the table size.
    #[must_use]
    pub fn article_count_matches(&self) -> bool {
        self.articles_found == self.articles_expected
    }

    /// True when every count matches and no anomalies were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.article_count_matches()
            && self.discrepancies().next().is_none()
            && self.anomalies.is_empty()
    }

    /// Final summary line, e.g. "Articles found: 42 of 42 expected".
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Articles found: {} of {} expected",
            self.articles_found, self.articles_expected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(article: &str, expected: Option<usize>, actual: Option<usize>) -> ArticleCheck {
        ArticleCheck {
            article: article.to_string(),
            expected,
            actual,
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(check("I", Some(2), Some(2)).status(), CheckStatus::Match);
        assert_eq!(check("I", Some(2), Some(3)).status(), CheckStatus::Mismatch);
        assert_eq!(check("I", Some(2), None).status(), CheckStatus::Missing);
        assert_eq!(check("I", None, Some(1)).status(), CheckStatus::Unlisted);
    }

    #[test]
    fn test_display() {
        assert_eq!(check("VII", Some(14), Some(14)).to_string(), "Article VII: 14 sections");
        assert_eq!(
            check("VII", Some(14), Some(12)).to_string(),
            "Article VII: expected 14 sections, found 12"
        );
        assert_eq!(
            check("IX", Some(3), None).to_string(),
            "Article IX: expected 3 sections, Article not found"
        );
        assert_eq!(
            check("XLIII", None, Some(1)).to_string(),
            "Article XLIII: 1 sections, not in reference table"
        );
    }

    #[test]
    fn test_report_summary_and_cleanliness() {
        let report = VerificationReport {
            checks: vec![check("I", Some(1), Some(1)), check("II", Some(0), Some(0))],
            articles_found: 2,
            articles_expected: 2,
            anomalies: Vec::new(),
        };
        assert!(report.is_clean());
        assert_eq!(report.summary(), "Articles found: 2 of 2 expected");

        let report = VerificationReport {
            articles_found: 1,
            ..report
        };
        assert!(!report.article_count_matches());
        assert!(!report.is_clean());
    }
}
