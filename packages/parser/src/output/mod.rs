//! Structured output: one record per Article plus a combined record.

mod records;
mod writer;

pub use records::{AgreementRecord, ArticleRecord, SectionRecord};
pub use writer::{
    article_file_name, render, render_agreement, render_article, save_agreement,
};

use clap::ValueEnum;

/// Serialization format for emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML documents.
    #[default]
    Yaml,

    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}
