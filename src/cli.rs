//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-checker")]
#[command(about = "Score how well a resume matches a job description")]
#[command(long_about = "Compare resume keywords against a job description the way an applicant tracking system would, compare two resumes, and browse common resume questions")]
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

/// Where the job description comes from
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Path to job description file (TXT, MD)
    #[arg(short, long, conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: console, json, markdown, html, text
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save the report to a file (use "-" for the default report name)
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to resume file (PDF, DOCX)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        #[command(flatten)]
        job: JobArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Print the start of the extracted resume text
        #[arg(long)]
        preview: bool,
    },

    /// Compare two resumes against the same job description
    Compare {
        /// First resume (PDF, DOCX)
        #[arg(long)]
        first: Option<PathBuf>,

        /// Second resume (PDF, DOCX)
        #[arg(long)]
        second: Option<PathBuf>,

        #[command(flatten)]
        job: JobArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Common resume questions
    Faq {
        #[command(subcommand)]
        action: FaqAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum FaqAction {
    /// List all questions
    List,

    /// Answer a question
    Ask {
        /// The question, as listed
        question: String,
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
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "text" | "txt" => Ok(OutputFormat::Text),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html, text", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_without_resume() {
        let cli = Cli::try_parse_from(["ats-checker", "score", "--job-text", "Python"]).unwrap();
        match cli.command {
            Commands::Score { resume, job, .. } => {
                assert!(resume.is_none());
                assert_eq!(job.job_text.as_deref(), Some("Python"));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_job_file_and_text_conflict() {
        let parsed = Cli::try_parse_from([
            "ats-checker", "score", "--job", "jd.txt", "--job-text", "Python",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("txt"), Ok(OutputFormat::Text));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "docx"];
        assert!(validate_file_extension(&PathBuf::from("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.odt"), &allowed).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &allowed).is_err());
    }
}
