//! Configuration constants and the tunables threaded through a parse.

use std::path::Path;

/// Minimum length (in characters, after trimming) for a content block to be
/// kept. Shorter Section bodies and intros are treated as noise.
pub const DEFAULT_MIN_CONTENT_LEN: usize = 10;

/// How many lines after a marker the heading resolver may look for a title.
pub const DEFAULT_TITLE_LOOKAHEAD: usize = 4;

/// Number of Articles the agreement is expected to contain.
pub const EXPECTED_ARTICLE_COUNT: usize = 42;

/// Default directory for emitted records.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File stem of the combined record.
pub const COMBINED_FILE_STEM: &str = "agreement";

/// Tunables for a single parse.
///
/// # Examples
/// ```
/// use cba_parser::config::ParserConfig;
///
/// let config = ParserConfig::default().with_min_content_len(20);
/// assert_eq!(config.min_content_len, 20);
/// assert_eq!(config.title_lookahead, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Content blocks shorter than this are dropped.
    pub min_content_len: usize,

    /// Lookahead window for next-line titles.
    pub title_lookahead: usize,
}

impl ParserConfig {
    /// Set the minimum content length.
    #[must_use]
    pub fn with_min_content_len(mut self, len: usize) -> Self {
        self.min_content_len = len;
        self
    }

    /// Set the title lookahead window.
    #[must_use]
    pub fn with_title_lookahead(mut self, lines: usize) -> Self {
        self.title_lookahead = lines;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
            title_lookahead: DEFAULT_TITLE_LOOKAHEAD,
        }
    }
}

/// Default output directory as a path.
#[must_use]
pub fn default_output_dir() -> &'static Path {
    Path::new(DEFAULT_OUTPUT_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.min_content_len, 10);
        assert_eq!(config.title_lookahead, 4);
    }

    #[test]
    fn test_config_builders() {
        let config = ParserConfig::default()
            .with_min_content_len(0)
            .with_title_lookahead(2);
        assert_eq!(config.min_content_len, 0);
        assert_eq!(config.title_lookahead, 2);
    }
}
