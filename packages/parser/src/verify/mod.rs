//! Structural verification of a parsed agreement.
//!
//! Compares the Section count of every Article with an advisory reference
//! table. Discrepancies are reported and logged, never raised as errors.

mod reference;
mod report;

pub use reference::{create_agreement_reference_table, ReferenceEntry, ReferenceTable};
pub use report::{ArticleCheck, CheckStatus, VerificationReport};

use crate::types::Agreement;

/// Cross-check an agreement against a reference table.
///
/// # Examples
/// ```
/// use cba_parser::config::ParserConfig;
/// use cba_parser::parser::parse_document;
/// use cba_parser::source::Document;
/// use cba_parser::verify::{verify, ReferenceEntry, ReferenceTable};
///
/// let doc = Document::from_text("ARTICLE I\nDEFINITIONS\nSection 1. Player\nA Player is a person.");
/// let agreement = parse_document(&doc, &ParserConfig::default());
/// let table = ReferenceTable::new([ReferenceEntry { article: "I".into(), sections: 1 }]).unwrap();
///
/// let report = verify(&agreement, &table);
/// assert!(report.is_clean());
/// ```
#[must_use]
pub fn verify(agreement: &Agreement, table: &ReferenceTable) -> VerificationReport {
    let mut checks: Vec<ArticleCheck> = table
        .iter()
        .map(|(numeral, expected)| ArticleCheck {
            article: numeral.to_string(),
            expected: Some(expected),
            actual: agreement
                .article(numeral.as_str())
                .map(|a| a.sections.len()),
        })
        .collect();

    checks.extend(
        agreement
            .articles
            .iter()
            .filter(|a| table.expected_sections(a.numeral.as_str()).is_none())
            .map(|a| ArticleCheck {
                article: a.numeral.to_string(),
                expected: None,
                actual: Some(a.sections.len()),
            }),
    );

    for check in checks.iter().filter(|c| c.status() != CheckStatus::Match) {
        tracing::warn!(status = check.status().as_str(), "{check}");
    }

    let report = VerificationReport {
        checks,
        articles_found: agreement.articles.len(),
        articles_expected: table.len(),
        anomalies: agreement.anomalies.clone(),
    };

    if !report.article_count_matches() {
        tracing::warn!(
            found = report.articles_found,
            expected = report.articles_expected,
            "Article count differs from reference table"
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Anomaly, Article, ArticleNumeral, LineSpan, Section};
    use pretty_assertions::assert_eq;

    fn article(value: u32, sections: usize) -> Article {
        Article {
            numeral: ArticleNumeral::from_value(value).unwrap(),
            title: String::new(),
            intro_content: String::new(),
            sections: (1..=sections)
                .map(|n| Section {
                    number: n as u32,
                    title: String::new(),
                    content: "content text".to_string(),
                    line: n,
                })
                .collect(),
            span: LineSpan::default(),
        }
    }

    fn table(rows: &[(&str, usize)]) -> ReferenceTable {
        ReferenceTable::new(rows.iter().map(|(article, sections)| ReferenceEntry {
            article: (*article).to_string(),
            sections: *sections,
        }))
        .unwrap()
    }

    #[test]
    fn test_verify_all_match() {
        let agreement = Agreement {
            articles: vec![article(1, 2), article(2, 0)],
            ..Agreement::default()
        };
        let report = verify(&agreement, &table(&[("I", 2), ("II", 0)]));

        assert!(report.is_clean());
        assert_eq!(report.checks.len(), 2);
    }

    #[test]
    fn test_verify_reports_each_kind_of_discrepancy() {
        let agreement = Agreement {
            articles: vec![article(1, 3), article(4, 1)],
            ..Agreement::default()
        };
        let report = verify(&agreement, &table(&[("I", 2), ("II", 5)]));

        let statuses: Vec<(&str, CheckStatus)> = report
            .checks
            .iter()
            .map(|c| (c.article.as_str(), c.status()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("I", CheckStatus::Mismatch),
                ("II", CheckStatus::Missing),
                ("IV", CheckStatus::Unlisted),
            ]
        );
        assert_eq!(report.discrepancies().count(), 3);
        assert!(report.article_count_matches());
    }

    #[test]
    fn test_verify_article_total_against_builtin_table() {
        let agreement = Agreement {
            articles: vec![article(1, 0)],
            ..Agreement::default()
        };
        let report = verify(&agreement, &create_agreement_reference_table());

        assert_eq!(report.articles_found, 1);
        assert_eq!(report.articles_expected, 42);
        assert!(!report.article_count_matches());
        assert_eq!(report.summary(), "Articles found: 1 of 42 expected");
    }

    #[test]
    fn test_verify_carries_anomalies() {
        let agreement = Agreement {
            articles: vec![article(1, 1)],
            anomalies: vec![Anomaly::UnresolvedTitle {
                heading: "Article I".to_string(),
                line: 0,
            }],
            ..Agreement::default()
        };
        let report = verify(&agreement, &table(&[("I", 1)]));

        assert_eq!(report.anomalies.len(), 1);
        assert!(!report.is_clean());
    }
}
