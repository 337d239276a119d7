//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match a resume against job postings and build a shortlist")]
#[command(
    long_about = "Extract a structured candidate profile from a resume and rank job postings \
                  by role, experience and skills fit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract and show the candidate profile
    Profile {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score job postings against a resume
    Match {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job posting files (JSON, CSV); repeat for several sources
        #[arg(short, long, required = true, num_args = 1..)]
        jobs: Vec<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Show score breakdowns and matched skills
        #[arg(short, long)]
        detailed: bool,

        /// Maximum postings shown per section
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also list postings that fall below the shortlist
        #[arg(short, long)]
        all: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_match_command_parses() {
        let cli = Cli::try_parse_from([
            "resume-matcher",
            "match",
            "--resume",
            "cv.md",
            "--jobs",
            "a.json",
            "b.csv",
            "--limit",
            "5",
            "--all",
        ])
        .unwrap();

        match cli.command {
            Commands::Match { jobs, limit, all, .. } => {
                assert_eq!(jobs.len(), 2);
                assert_eq!(limit, Some(5));
                assert!(all);
            }
            _ => panic!("expected match command"),
        }
    }
}
