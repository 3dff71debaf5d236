//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    default_output_dir, ParserConfig, DEFAULT_MIN_CONTENT_LEN, DEFAULT_TITLE_LOOKAHEAD,
};
use crate::error::Result;
use crate::output::{save_agreement, OutputFormat};
use crate::parser::parse_file;
use crate::types::Agreement;
use crate::verify::{verify, CheckStatus, ReferenceTable, VerificationReport};

/// CBA Parser - Split a collective-bargaining agreement into Articles and Sections.
#[derive(Parser)]
#[command(name = "cba-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that parses a document.
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Plain-text agreement to parse
    pub input: PathBuf,

    /// YAML reference table with expected Section counts (default: built-in table)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Drop content blocks shorter than this many characters
    #[arg(long, default_value_t = DEFAULT_MIN_CONTENT_LEN)]
    pub min_content_length: usize,

    /// Lines to look ahead for a heading title
    #[arg(long, default_value_t = DEFAULT_TITLE_LOOKAHEAD)]
    pub title_lookahead: usize,
}

impl ParseArgs {
    fn config(&self) -> ParserConfig {
        ParserConfig::default()
            .with_min_content_len(self.min_content_length)
            .with_title_lookahead(self.title_lookahead)
    }

    fn reference_table(&self) -> Result<ReferenceTable> {
        match &self.reference {
            Some(path) => ReferenceTable::load(path),
            None => Ok(ReferenceTable::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the agreement, verify it and write the records.
    Parse {
        #[command(flatten)]
        args: ParseArgs,

        /// Output directory (default: output/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Parse the agreement and print the verification report only.
    Verify {
        #[command(flatten)]
        args: ParseArgs,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            args,
            output,
            format,
        } => parse_command(&args, output.as_deref(), format),
        Commands::Verify { args } => verify_command(&args),
    }
}

/// Execute the parse command.
fn parse_command(args: &ParseArgs, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    // Load the reference table before touching the document
    let table = args.reference_table()?;
    let agreement = parse_with_spinner(args)?;

    let report = verify(&agreement, &table);
    print_report(&report);

    let output_dir = output.unwrap_or(default_output_dir());
    let written = save_agreement(&agreement, output_dir, format)?;

    println!();
    println!(
        "{} {} files in {}",
        style("Saved").green().bold(),
        written.len(),
        output_dir.display()
    );
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}

/// Execute the verify command.
fn verify_command(args: &ParseArgs) -> Result<()> {
    let table = args.reference_table()?;
    let agreement = parse_with_spinner(args)?;

    let report = verify(&agreement, &table);
    print_report(&report);

    Ok(())
}

fn parse_with_spinner(args: &ParseArgs) -> Result<Agreement> {
    println!(
        "{} {}",
        style("Parsing").bold(),
        style(args.input.display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Segmenting articles...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = parse_file(&args.input, &args.config());
    pb.finish_and_clear();
    let agreement = result?;

    println!("  Articles: {}", agreement.articles.len());
    println!("  Sections: {}", agreement.section_count());
    if !agreement.front_matter.is_empty() {
        println!("  Front matter: {} (skipped)", agreement.front_matter);
    }
    if !agreement.anomalies.is_empty() {
        println!(
            "  Anomalies: {}",
            style(agreement.anomalies.len()).yellow().bold()
        );
    }
    println!();

    Ok(agreement)
}

/// Print expected-vs-actual counts for every Article and the final total.
fn print_report(report: &VerificationReport) {
    println!("{}", style("Verification").bold());

    for check in &report.checks {
        let marker = match check.status() {
            CheckStatus::Match => style("ok  ").green(),
            CheckStatus::Mismatch => style("diff").yellow(),
            CheckStatus::Missing => style("miss").red(),
            CheckStatus::Unlisted => style("new ").cyan(),
        };
        println!("  {marker} {check}");
    }

    for anomaly in &report.anomalies {
        println!("  {} {anomaly}", style("warn").yellow());
    }

    let summary = if report.article_count_matches() {
        style(report.summary()).green()
    } else {
        style(report.summary()).yellow().bold()
    };
    println!();
    println!("{summary}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["cba-parser", "parse", "cba.txt"]);

        let Commands::Parse {
            args,
            output,
            format,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(args.input, PathBuf::from("cba.txt"));
        assert!(args.reference.is_none());
        assert_eq!(args.min_content_length, DEFAULT_MIN_CONTENT_LEN);
        assert_eq!(args.title_lookahead, DEFAULT_TITLE_LOOKAHEAD);
        assert!(output.is_none());
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "cba-parser",
            "parse",
            "cba.txt",
            "--output",
            "out",
            "--format",
            "json",
            "--min-content-length",
            "20",
            "--title-lookahead",
            "2",
        ]);

        let Commands::Parse {
            args,
            output,
            format,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(output, Some(PathBuf::from("out")));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(
            args.config(),
            ParserConfig::default()
                .with_min_content_len(20)
                .with_title_lookahead(2)
        );
    }

    #[test]
    fn test_cli_verify_with_reference() {
        let cli = Cli::parse_from(["cba-parser", "verify", "cba.txt", "-r", "ref.yaml"]);

        let Commands::Verify { args } = cli.command else {
            panic!("expected verify command");
        };
        assert_eq!(args.reference, Some(PathBuf::from("ref.yaml")));
    }
}
