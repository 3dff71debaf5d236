//! Serializable record shapes handed to downstream consumers.

use serde::{Deserialize, Serialize};

use crate::types::{Agreement, Article, Section};

/// A Section as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Label, e.g. "Section 4".
    pub number: String,
    pub title: String,
    pub content: String,
}

impl From<&Section> for SectionRecord {
    fn from(section: &Section) -> Self {
        Self {
            number: section.label(),
            title: section.title.clone(),
            content: section.content.clone(),
        }
    }
}

/// An Article as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Label, e.g. "Article VII".
    pub number: String,
    pub title: String,
    pub intro_content: String,
    pub sections: Vec<SectionRecord>,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            number: article.label(),
            title: article.title.clone(),
            intro_content: article.intro_content.clone(),
            sections: article.sections.iter().map(SectionRecord::from).collect(),
        }
    }
}

/// All Articles in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementRecord {
    pub articles: Vec<ArticleRecord>,
}

impl From<&Agreement> for AgreementRecord {
    fn from(agreement: &Agreement) -> Self {
        Self {
            articles: agreement.articles.iter().map(ArticleRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArticleNumeral, LineSpan};

    #[test]
    fn test_article_record_labels_and_field_names() {
        let article = Article {
            numeral: ArticleNumeral::from_value(7).unwrap(),
            title: "BRI".to_string(),
            intro_content: "Intro text for the Article.".to_string(),
            sections: vec![Section {
                number: 4,
                title: "Player Conduct".to_string(),
                content: "Body".to_string(),
                line: 3,
            }],
            span: LineSpan::new(0, 5),
        };

        let record = ArticleRecord::from(&article);
        assert_eq!(record.number, "Article VII");
        assert_eq!(record.sections[0].number, "Section 4");

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("introContent").is_some());
        assert!(json.get("intro_content").is_none());
        assert!(json.get("span").is_none());
    }
}
