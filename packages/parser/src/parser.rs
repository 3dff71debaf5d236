//! Parser service that ties all components together.

use std::path::Path;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::segment::segment_articles;
use crate::source::Document;
use crate::tokenize::tokenize_article;
use crate::types::Agreement;

/// Parse an agreement from a file.
///
/// # Arguments
/// * `path` - Path to the plain-text agreement
/// * `config` - Parser tunables
///
/// # Returns
/// The Article hierarchy together with any anomalies found on the way.
///
/// # Errors
/// Only when the document cannot be loaded; structural problems are
/// recorded in [`Agreement::anomalies`].
pub fn parse_file(path: &Path, config: &ParserConfig) -> Result<Agreement> {
    let doc = Document::load(path)?;
    Ok(parse_document(&doc, config))
}

/// Parse an already loaded document.
///
/// Segments the document into Articles, then tokenizes each Article span
/// independently. Articles are returned in document order.
#[must_use]
pub fn parse_document(doc: &Document, config: &ParserConfig) -> Agreement {
    let segmentation = segment_articles(doc);
    let mut anomalies = segmentation.anomalies;

    let articles = segmentation
        .articles
        .iter()
        .map(|span| {
            let (article, article_anomalies) = tokenize_article(doc, span, config);
            anomalies.extend(article_anomalies);
            article
        })
        .collect::<Vec<_>>();

    let agreement = Agreement {
        articles,
        front_matter: segmentation.front_matter,
        anomalies,
    };

    tracing::debug!(
        articles = agreement.articles.len(),
        sections = agreement.section_count(),
        anomalies = agreement.anomalies.len(),
        "Parsed agreement"
    );
    agreement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;
    use crate::types::Anomaly;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_document_minimal() {
        let doc = Document::from_text(
            "ARTICLE I\nDEFINITIONS\nSection 1.\nPlayer\nA Player is ...\nSection 2. Team\nA Team is ...",
        );
        let agreement = parse_document(&doc, &ParserConfig::default());

        assert_eq!(agreement.articles.len(), 1);
        assert_eq!(agreement.section_count(), 2);
        assert!(agreement.front_matter.is_empty());
        assert!(agreement.anomalies.is_empty());
    }

    #[test]
    fn test_parse_document_definitions_and_contracts() {
        let body = "The Club and the Player agree to the terms of the Uniform Player Contract. ".repeat(3);
        let text = format!(
            "ARTICLE I\nDEFINITIONS\nSection 1.\nPlayer\nA Player is ...\nSection 2. Team\nA Team is ...\nARTICLE II\nPLAYER CONTRACTS\n{body}"
        );
        let agreement = parse_document(&Document::from_text(&text), &ParserConfig::default());

        assert_eq!(agreement.articles.len(), 2);

        let first = &agreement.articles[0];
        assert_eq!(first.label(), "Article I");
        assert_eq!(first.title, "DEFINITIONS");
        let sections: Vec<(u32, &str)> = first
            .sections
            .iter()
            .map(|s| (s.number, s.title.as_str()))
            .collect();
        assert_eq!(sections, vec![(1, "Player"), (2, "Team")]);
        assert!(first.sections.iter().all(|s| !s.content.is_empty()));

        let second = &agreement.articles[1];
        assert_eq!(second.title, "PLAYER CONTRACTS");
        assert!(second.sections.is_empty());
        assert_eq!(second.intro_content, body.trim());
    }

    #[test]
    fn test_parse_document_collects_anomalies_in_order() {
        let doc = Document::from_text(
            "ARTICLE II\nSECOND\nARTICLE I\nFIRST\nSection 1. A\nContent of the Section.\nSection 1. B\nContent of the other one.",
        );
        let agreement = parse_document(&doc, &ParserConfig::default());

        assert_eq!(agreement.anomalies.len(), 2);
        assert!(matches!(agreement.anomalies[0], Anomaly::OutOfOrderArticle { .. }));
        assert!(matches!(agreement.anomalies[1], Anomaly::DuplicateSection { .. }));
    }

    #[test]
    fn test_parse_document_empty() {
        let agreement = parse_document(&Document::from_text(""), &ParserConfig::default());
        assert!(agreement.articles.is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/missing/agreement.txt"), &ParserConfig::default())
            .unwrap_err();
        assert!(matches!(err, ParserError::NotFound(_)));
    }
}
