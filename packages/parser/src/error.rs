//! Error types for the parser.
//!
//! Only conditions that stop a run end up here. Structural problems in the
//! document itself (count mismatches, odd numerals, missing titles) are
//! [`Anomaly`](crate::types::Anomaly) values and never abort parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The source document does not exist.
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The source document exists but could not be read.
    #[error("Failed to read document {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference table file was unreadable or malformed.
    #[error("Invalid reference table: {0}")]
    InvalidReferenceTable(String),

    /// The configured output location cannot hold the records.
    #[error("Output path is not a directory: {}", .0.display())]
    InvalidOutputDir(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
