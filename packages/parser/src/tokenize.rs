//! Section tokenization within one Article span.
//!
//! The tokenizer walks the Article body once. Lines before the first
//! Section marker go to the Article intro; every Section marker closes the
//! open Section and opens a new one. All state lives in [`ArticleState`],
//! which is local to one call, so Articles can be tokenized independently.

use std::collections::BTreeSet;

use crate::config::ParserConfig;
use crate::content::ContentBuffer;
use crate::heading::{resolve_heading, Heading};
use crate::markers::{classify_line, Marker};
use crate::segment::ArticleSpan;
use crate::source::Document;
use crate::types::{Anomaly, Article, Section};

/// A Section whose body is still being collected.
#[derive(Debug)]
struct OpenSection {
    number: u32,
    title: String,
    line: usize,
    body: ContentBuffer,
}

/// Parsing state for a single Article.
#[derive(Debug)]
struct ArticleState<'a> {
    article: String,
    config: &'a ParserConfig,
    intro: ContentBuffer,
    open: Option<OpenSection>,
    sections: Vec<Section>,
    seen_numbers: BTreeSet<u32>,
    anomalies: Vec<Anomaly>,
}

impl<'a> ArticleState<'a> {
    fn new(article: String, config: &'a ParserConfig) -> Self {
        Self {
            article,
            config,
            intro: ContentBuffer::new(),
            open: None,
            sections: Vec::new(),
            seen_numbers: BTreeSet::new(),
            anomalies: Vec::new(),
        }
    }

    /// Route a body line to the open Section, or to the intro.
    fn push_line(&mut self, line: &str) {
        match self.open.as_mut() {
            Some(section) => section.body.push(line),
            None => self.intro.push(line),
        }
    }

    /// Close the open Section and start a new one.
    fn open_section(&mut self, number: u32, heading: Heading, line: usize) {
        self.close_section();

        if !self.seen_numbers.insert(number) {
            tracing::warn!(
                article = %self.article,
                section = number,
                line,
                "Section number repeated within Article"
            );
            self.anomalies.push(Anomaly::DuplicateSection {
                article: self.article.clone(),
                number,
                line,
            });
        }
        if !heading.is_resolved() {
            self.unresolved(format!("Section {number} of Article {}", self.article), line);
        }

        self.open = Some(OpenSection {
            number,
            title: heading.title,
            line,
            body: ContentBuffer::new(),
        });
    }

    /// Finalize the open Section. Sections without enough content are dropped.
    fn close_section(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        if let Some(content) = open.body.finish(self.config.min_content_len) {
            self.sections.push(Section {
                number: open.number,
                title: open.title,
                content,
                line: open.line,
            });
        }
    }

    fn unresolved(&mut self, heading: String, line: usize) {
        tracing::warn!(heading = %heading, line, "No title found within lookahead window");
        self.anomalies.push(Anomaly::UnresolvedTitle { heading, line });
    }
}

/// Tokenize one Article span into an [`Article`] and its anomalies.
///
/// # Examples
/// ```
/// use cba_parser::config::ParserConfig;
/// use cba_parser::segment::segment_articles;
/// use cba_parser::source::Document;
/// use cba_parser::tokenize::tokenize_article;
///
/// let doc = Document::from_text(
///     "ARTICLE VI\nPLAYER CONDUCT\nSection 3. Player Conduct\nPlayers shall conduct themselves ...",
/// );
/// let segmentation = segment_articles(&doc);
/// let (article, anomalies) =
///     tokenize_article(&doc, &segmentation.articles[0], &ParserConfig::default());
///
/// assert_eq!(article.title, "PLAYER CONDUCT");
/// assert_eq!(article.sections[0].title, "Player Conduct");
/// assert!(anomalies.is_empty());
/// ```
#[must_use]
pub fn tokenize_article(
    doc: &Document,
    span: &ArticleSpan,
    config: &ParserConfig,
) -> (Article, Vec<Anomaly>) {
    // Indices into `lines` are relative to the Article marker.
    let lines = doc.slice(span.span);
    let offset = span.span.start;
    let end = lines.len();

    let mut state = ArticleState::new(span.numeral.to_string(), config);

    let article_heading = resolve_heading(lines, 0, None, end, config.title_lookahead);
    if !article_heading.is_resolved() {
        state.unresolved(format!("Article {}", span.numeral), offset);
    }

    let mut line = article_heading.body_start(0);
    while line < end {
        let text = &lines[line];
        match classify_line(text) {
            Some(Marker::Section {
                number,
                inline_title,
            }) => {
                let heading = resolve_heading(
                    lines,
                    line,
                    inline_title.as_deref(),
                    end,
                    config.title_lookahead,
                );
                let body_start = heading.body_start(line);
                state.open_section(number, heading, offset + line);
                line = body_start;
            }
            // Duplicate Article markers fall inside a span; they are not body.
            Some(Marker::Article(_)) => line += 1,
            None => {
                state.push_line(text);
                line += 1;
            }
        }
    }
    state.close_section();

    let intro_content = state.intro.finish(config.min_content_len).unwrap_or_default();

    tracing::debug!(
        article = %span.numeral,
        sections = state.sections.len(),
        "Tokenized Article"
    );

    let article = Article {
        numeral: span.numeral.clone(),
        title: article_heading.title,
        intro_content,
        sections: state.sections,
        span: span.span,
    };
    (article, state.anomalies)
}
