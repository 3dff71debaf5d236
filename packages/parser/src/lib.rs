//! CBA Parser - Split a plain-text collective-bargaining agreement into
//! structured Articles and Sections.
//!
//! # Example
//!
//! ```
//! use cba_parser::{parse_document, Document, ParserConfig};
//!
//! let doc = Document::from_text(
//!     "ARTICLE I\nDEFINITIONS\nSection 1. Player\nA Player is any person under contract.",
//! );
//! let agreement = parse_document(&doc, &ParserConfig::default());
//!
//! assert_eq!(agreement.articles[0].title, "DEFINITIONS");
//! assert_eq!(agreement.articles[0].sections[0].title, "Player");
//! ```
//!
//! # Architecture
//!
//! The parser is organized into several modules, leaf-first:
//!
//! - [`source`]: Loads the document as ordered lines
//! - [`roman`]: Roman numeral conversion
//! - [`markers`]: Article/Section marker and divider recognition
//! - [`segment`]: Article boundary detection
//! - [`heading`]: Title resolution for markers
//! - [`content`]: Body text accumulation and noise filtering
//! - [`tokenize`]: Section tokenization within an Article
//! - [`verify`]: Cross-check against a reference table
//! - [`output`]: YAML/JSON record generation
//! - [`parser`]: Main parser service
//! - [`types`]: Core data types (Article, Section, Anomaly, etc.)
//! - [`config`]: Configuration constants and tunables
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod heading;
pub mod markers;
pub mod output;
pub mod parser;
pub mod roman;
pub mod segment;
pub mod source;
pub mod tokenize;
pub mod types;
pub mod verify;

// Re-export main functions
pub use parser::{parse_document, parse_file};

// Re-export commonly used items
pub use config::ParserConfig;
pub use error::{ParserError, Result};
pub use source::Document;
pub use types::{Agreement, Anomaly, Article, ArticleNumeral, LineSpan, Section};
