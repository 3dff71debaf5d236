//! Rendering and saving of Article records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::records::{AgreementRecord, ArticleRecord};
use super::OutputFormat;
use crate::config::COMBINED_FILE_STEM;
use crate::error::{ParserError, Result};
use crate::types::{Agreement, Article, ArticleNumeral};

/// Serialize a record in the given format.
///
/// YAML output starts with a `---` document marker; both formats end with a
/// newline.
pub fn render<T: Serialize>(record: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(record)?;
            let body = yaml.strip_prefix("---\n").unwrap_or(&yaml);
            let lines: Vec<&str> = body.lines().map(str::trim_end).collect();
            Ok(format!("---\n{}\n", lines.join("\n")))
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(record)?;
            Ok(format!("{json}\n"))
        }
    }
}

/// Render a single Article record.
pub fn render_article(article: &Article, format: OutputFormat) -> Result<String> {
    render(&ArticleRecord::from(article), format)
}

/// Render the combined record of all Articles.
pub fn render_agreement(agreement: &Agreement, format: OutputFormat) -> Result<String> {
    render(&AgreementRecord::from(agreement), format)
}

/// File name for an Article record, e.g. `article_VII.yaml`.
#[must_use]
pub fn article_file_name(article: &Article, format: OutputFormat) -> String {
    format!("article_{}.{}", article.numeral, format.extension())
}

/// Write every Article record and the combined record into `output_dir`.
///
/// The directory is created if needed. Files are written atomically, so an
/// interrupted run never leaves a half-written record behind. Article
/// records of the same format that this run did not write are removed.
///
/// # Returns
/// Paths of the written files: Articles in document order, then the
/// combined record.
pub fn save_agreement(
    agreement: &Agreement,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(ParserError::InvalidOutputDir(output_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(agreement.articles.len() + 1);

    for article in &agreement.articles {
        let path = output_dir.join(article_file_name(article, format));
        write_atomic(&path, &render_article(article, format)?)?;
        written.push(path);
    }

    let combined = output_dir.join(format!("{COMBINED_FILE_STEM}.{}", format.extension()));
    write_atomic(&combined, &render_agreement(agreement, format)?)?;
    written.push(combined);

    remove_stale_articles(output_dir, &written, format)?;

    tracing::debug!(
        files = written.len(),
        dir = %output_dir.display(),
        "Saved records"
    );
    Ok(written)
}

/// Delete Article records of this format left by an earlier run whose
/// Articles are no longer in the document.
fn remove_stale_articles(
    output_dir: &Path,
    written: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let suffix = format!(".{}", format.extension());

    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let is_article_record = name
            .strip_prefix("article_")
            .and_then(|rest| rest.strip_suffix(suffix.as_str()))
            .and_then(ArticleNumeral::parse)
            .is_some();
        if !is_article_record || written.contains(&path) {
            continue;
        }

        tracing::warn!(path = %path.display(), "Removing stale Article record");
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Write to a temp file, sync it, then rename over the destination.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp, path)?;
    Ok(())
}
