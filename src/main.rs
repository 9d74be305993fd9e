//! ats-checker: resume vs. job description keyword scoring

use ats_checker::cli::{self, Cli, Commands, ConfigAction, FaqAction, JobArgs, OutputArgs};
use ats_checker::config::{Config, OutputFormat};
use ats_checker::error::{Result, AtsError};
use ats_checker::faq::FaqCatalog;
use ats_checker::input::{Document, InputManager};
use ats_checker::output::formatter::{save_report_to_file, suggest_filename};
use ats_checker::output::{ComparisonReport, ReportGenerator, ScoreReport};
use ats_checker::processing::{engine, AtsEngine};
use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            preview,
        } => {
            info!("Starting ATS score calculation");
            let format = resolve_format(&output, &config)?;
            let input_manager = InputManager::new();

            let resume = engine::require_resume(resume.as_deref())?;
            let resume_doc = load_resume(&input_manager, resume).await?;
            let job_text = read_job_text(&input_manager, &job).await?;

            let engine = AtsEngine::new(&config.keywords);
            let evaluation = engine.evaluate(Some(&resume_doc), &job_text)?;

            let resume_name = resume_doc.name().to_string();

            if preview {
                println!("📄 Resume Preview:");
                println!("{}\n", truncate_text(&evaluation.resume_text, 500));
            }

            let report = ScoreReport::new(resume_name.clone(), job_source(&job), evaluation.result);
            let generator = ReportGenerator::with_options(config.output.color_output, true, true);
            println!("{}", generator.generate_score(&report, format)?);

            if let Some(save) = output.save {
                let save_format = downloadable(format);
                let path = save_path(save, save_format, &resume_name, &config);
                let plain = ReportGenerator::with_options(false, true, true);
                save_report_to_file(&plain.generate_score(&report, save_format)?, &path)?;
                println!("📥 Report saved to {}", path.display());
            }
        }

        Commands::Compare {
            first,
            second,
            job,
            output,
        } => {
            info!("Starting resume comparison");
            let format = resolve_format(&output, &config)?;
            let input_manager = InputManager::new();

            let (first, second) = engine::require_resume_pair(first.as_deref(), second.as_deref())?;
            let first_doc = load_resume(&input_manager, first).await?;
            let second_doc = load_resume(&input_manager, second).await?;
            let job_text = read_job_text(&input_manager, &job).await?;

            let engine = AtsEngine::new(&config.keywords);
            let comparison = engine.evaluate_pair(Some(&first_doc), Some(&second_doc), &job_text)?;

            let report = ComparisonReport::new(
                first_doc.name(),
                second_doc.name(),
                job_source(&job),
                comparison,
            );

            let generator = ReportGenerator::with_options(config.output.color_output, true, true);
            println!("{}", generator.generate_comparison(&report, format)?);

            if let Some(save) = output.save {
                let save_format = downloadable(format);
                let path = save_path(save, save_format, "comparison", &config);
                let plain = ReportGenerator::with_options(false, true, true);
                save_report_to_file(&plain.generate_comparison(&report, save_format)?, &path)?;
                println!("📥 Report saved to {}", path.display());
            }
        }

        Commands::Faq { action } => {
            let faq = FaqCatalog::new();
            match action {
                FaqAction::List => {
                    println!("🤖 Resume Questions\n");
                    for (i, question) in faq.questions().enumerate() {
                        println!("  {:>2}. {}", i + 1, question);
                    }
                }

                FaqAction::Ask { question } => match faq.lookup(&question) {
                    Some(answer) => println!("Answer: {}", answer),
                    None => {
                        let hint = faq
                            .suggest(&question)
                            .map(|s| format!(" Did you mean \"{}\"?", s))
                            .unwrap_or_default();
                        return Err(AtsError::InvalidInput(format!(
                            "No answer for \"{}\".{} Run `ats-checker faq list` to see all questions.",
                            question, hint
                        )));
                    }
                },
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration written to {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn resolve_format(output: &OutputArgs, config: &Config) -> Result<OutputFormat> {
    match &output.output {
        Some(format) => cli::parse_output_format(format).map_err(AtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Console output carries colors, so saved copies fall back to plain text
fn downloadable(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Console => OutputFormat::Text,
        other => other,
    }
}

fn save_path(requested: PathBuf, format: OutputFormat, resume_name: &str, config: &Config) -> PathBuf {
    if requested.as_os_str() == "-" {
        PathBuf::from(suggest_filename(format, resume_name, config.output.include_timestamp))
    } else {
        requested
    }
}

async fn load_resume(input_manager: &InputManager, path: &Path) -> Result<Document> {
    cli::validate_file_extension(&path.to_path_buf(), &RESUME_EXTENSIONS)
        .map_err(|e| AtsError::UnsupportedFormat(format!("Resume file {}: {}", path.display(), e)))?;
    input_manager.load_document(path).await
}

/// Empty when no job description was given; the engine reports that case.
async fn read_job_text(input_manager: &InputManager, job: &JobArgs) -> Result<String> {
    match (&job.job, &job.job_text) {
        (Some(path), _) => input_manager.read_job_description(path).await,
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => Ok(String::new()),
    }
}

fn job_source(job: &JobArgs) -> String {
    match &job.job {
        Some(path) => path.display().to_string(),
        None => "inline text".to_string(),
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let truncated = &text[..cut];
            // Find the last word boundary to avoid cutting words
            let end = truncated.rfind(char::is_whitespace).unwrap_or(cut);
            format!("{}...", &text[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Python developer", 50), "Python developer");
    }

    #[test]
    fn test_truncate_text_on_word_boundary() {
        assert_eq!(truncate_text("Senior Python developer", 10), "Senior...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("Résumé été", 8), "Résumé...");
    }

    #[test]
    fn test_downloadable_format() {
        assert_eq!(downloadable(OutputFormat::Console), OutputFormat::Text);
        assert_eq!(downloadable(OutputFormat::Json), OutputFormat::Json);
    }

    fn score_command(resume: Option<&str>, job: Option<&str>) -> Commands {
        Commands::Score {
            resume: resume.map(PathBuf::from),
            job: JobArgs {
                job: job.map(PathBuf::from),
                job_text: None,
            },
            output: OutputArgs::default(),
            preview: false,
        }
    }

    fn compare_command(first: Option<&str>, second: Option<&str>) -> Commands {
        Commands::Compare {
            first: first.map(PathBuf::from),
            second: second.map(PathBuf::from),
            job: JobArgs {
                job: Some(PathBuf::from("missing_job.txt")),
                job_text: None,
            },
            output: OutputArgs::default(),
        }
    }

    async fn run(command: Commands) -> AtsError {
        run_command(command, Config::default(), Path::new("unused.toml"))
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_missing_resume_reported_before_job_file_is_read() {
        let err = run(score_command(None, Some("missing_job.txt"))).await;
        assert!(matches!(err, AtsError::MissingInput(ref m) if m == engine::MISSING_RESUME));
        assert_eq!(err.to_string(), "Please upload a resume first");
    }

    #[tokio::test]
    async fn test_missing_job_description_once_resume_is_present() {
        let dir = tempfile::TempDir::new().unwrap();
        let resume = dir.path().join("cv.pdf");
        std::fs::write(&resume, b"not parsed before the job check").unwrap();

        let err = run(score_command(resume.to_str(), None)).await;
        assert!(matches!(err, AtsError::MissingInput(ref m) if m == engine::MISSING_JOB_DESCRIPTION));

        let err = run(score_command(None, None)).await;
        assert!(matches!(err, AtsError::MissingInput(ref m) if m == engine::MISSING_RESUME));
    }

    #[tokio::test]
    async fn test_missing_first_resume_reported_before_extension_check() {
        let err = run(compare_command(None, Some("cv.odt"))).await;
        assert!(matches!(
            err,
            AtsError::MissingInput(ref m) if m == engine::MISSING_COMPARISON_RESUMES
        ));

        let err = run(compare_command(Some("cv.odt"), None)).await;
        assert!(matches!(
            err,
            AtsError::MissingInput(ref m) if m == engine::MISSING_COMPARISON_RESUMES
        ));
    }

    #[tokio::test]
    async fn test_unsupported_resume_once_both_are_given() {
        let err = run(compare_command(Some("cv.odt"), Some("cv.pdf"))).await;
        assert!(matches!(err, AtsError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_save_path_default_name() {
        let config = Config::default();
        assert_eq!(
            save_path(PathBuf::from("-"), OutputFormat::Text, "cv.pdf", &config),
            PathBuf::from("ATS_Report.txt")
        );
        assert_eq!(
            save_path(PathBuf::from("out/report.md"), OutputFormat::Markdown, "cv.pdf", &config),
            PathBuf::from("out/report.md")
        );
    }
}
