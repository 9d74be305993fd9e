//! Output formatters for score and comparison reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::comparator::Verdict;
use crate::processing::keywords::KeywordSet;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String>;
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter;

/// The downloadable four-line report
pub struct TextFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    text_formatter: TextFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ATS Report: {{ resume }}</title>
</head>
<body>
    <h1>ATS Report</h1>
    <p>Resume: {{ resume }} | Job description: {{ job_description }} | Generated: {{ generated_at }}</p>
    <h2>ATS Score: {{ base_score }}% ({{ band }})</h2>
    <progress value="{{ base_score }}" max="100"></progress>
    <h2>Weighted ATS Score: {{ weighted_score }}%</h2>
    <h3>Matching Keywords</h3>
    {% if matched.is_empty() %}<p>No keywords matched.</p>{% else %}<ul>
    {% for keyword in matched %}<li>{{ keyword }}</li>
    {% endfor %}</ul>{% endif %}
    <h3>Missing Keywords</h3>
    {% if missing.is_empty() %}<p>No missing keywords!</p>{% else %}<ul>
    {% for keyword in missing %}<li>{{ keyword }}</li>
    {% endfor %}</ul>{% endif %}
    <p><small>ats-checker v{{ version }}</small></p>
</body>
</html>"#, ext = "html")]
struct HtmlScoreTemplate {
    resume: String,
    job_description: String,
    generated_at: String,
    base_score: u8,
    weighted_score: u8,
    band: String,
    matched: Vec<String>,
    missing: Vec<String>,
    version: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ATS Comparison</title>
</head>
<body>
    <h1>ATS Comparison</h1>
    <p>Job description: {{ job_description }} | Generated: {{ generated_at }}</p>
    <table>
        <tr><th></th><th>Resume</th><th>ATS Score</th><th>Matching Keywords</th></tr>
        <tr><td>1</td><td>{{ first_resume }}</td><td>{{ first_score }}%</td><td>{{ first_matched }}</td></tr>
        <tr><td>2</td><td>{{ second_resume }}</td><td>{{ second_score }}%</td><td>{{ second_matched }}</td></tr>
    </table>
    <h2>{{ verdict }}</h2>
    <p><small>ats-checker v{{ version }}</small></p>
</body>
</html>"#, ext = "html")]
struct HtmlComparisonTemplate {
    job_description: String,
    generated_at: String,
    first_resume: String,
    first_score: u8,
    first_matched: String,
    second_resume: String,
    second_score: u8,
    second_matched: String,
    verdict: String,
    version: String,
}

fn keyword_list(keywords: &KeywordSet) -> Vec<String> {
    keywords.iter().cloned().collect()
}

fn timestamp(metadata: &ReportMetadata) -> String {
    metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_keywords(&self, keywords: &KeywordSet, empty_message: &str, color: Color) -> String {
        if keywords.is_empty() {
            empty_message.to_string()
        } else {
            self.colorize(&keywords.join(", "), color)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS Score"));
        output.push_str(&format!(
            "Your resume matches {}% of JD keywords. {}\n",
            result.base_score_percent,
            self.format_score_badge(report.band())
        ));

        output.push_str(&self.format_header("Matching Keywords"));
        output.push_str(&self.format_keywords(&result.matched_keywords, "No keywords matched.", Color::Green));
        output.push('\n');

        output.push_str(&self.format_header("Missing Keywords"));
        output.push_str(&self.format_keywords(&result.missing_keywords, "No missing keywords!", Color::Yellow));
        output.push('\n');

        output.push_str(&self.format_header("Weighted ATS Score"));
        output.push_str(&format!("{}% (priority skills considered)\n", result.weighted_score_percent));

        Ok(output)
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("Resume Comparison"));
        for (index, name, score) in [
            (1, &report.first_resume, &result.first),
            (2, &report.second_resume, &result.second),
        ] {
            output.push_str(&format!(
                "Resume {} ({}) ATS Score: {}% | Matching Keywords: {}\n",
                index,
                name,
                score.base_score_percent,
                score.matched_keywords.join(", ")
            ));
        }

        let color = match result.verdict {
            Verdict::Tie => Color::Cyan,
            _ => Color::Green,
        };
        output.push('\n');
        output.push_str(&self.colorize(result.verdict.message(), color));
        output.push('\n');

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(keywords: &KeywordSet, empty_message: &str) -> String {
        if keywords.is_empty() {
            format!("_{}_\n", empty_message)
        } else {
            keywords.iter().map(|k| format!("- `{}`\n", k)).collect()
        }
    }

    fn footer(&self, metadata: &ReportMetadata) -> String {
        if self.include_metadata {
            format!(
                "\n---\n_Generated {} by ats-checker v{}_\n",
                timestamp(metadata),
                metadata.version
            )
        } else {
            String::new()
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# ATS Report\n\n");
        output.push_str(&format!(
            "**Resume:** {}  \n**Job description:** {}\n\n",
            report.resume, report.job_description
        ));
        output.push_str("| Metric | Value |\n|---|---|\n");
        output.push_str(&format!(
            "| ATS Score | {}% ({}) |\n",
            result.base_score_percent,
            report.band().label()
        ));
        output.push_str(&format!(
            "| Weighted ATS Score | {}% |\n\n",
            result.weighted_score_percent
        ));
        output.push_str("## Matching Keywords\n\n");
        output.push_str(&Self::bullet_list(&result.matched_keywords, "No keywords matched."));
        output.push_str("\n## Missing Keywords\n\n");
        output.push_str(&Self::bullet_list(&result.missing_keywords, "No missing keywords!"));
        output.push_str(&self.footer(&report.metadata));

        Ok(output)
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# ATS Comparison\n\n");
        output.push_str(&format!("**Job description:** {}\n\n", report.job_description));
        output.push_str("| # | Resume | ATS Score | Matching Keywords |\n|---|---|---|---|\n");
        output.push_str(&format!(
            "| 1 | {} | {}% | {} |\n",
            report.first_resume,
            result.first.base_score_percent,
            result.first.matched_keywords.join(", ")
        ));
        output.push_str(&format!(
            "| 2 | {} | {}% | {} |\n\n",
            report.second_resume,
            result.second.base_score_percent,
            result.second.matched_keywords.join(", ")
        ));
        output.push_str(&format!("**{}**\n", result.verdict.message()));
        output.push_str(&self.footer(&report.metadata));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let template = HtmlScoreTemplate {
            resume: report.resume.clone(),
            job_description: report.job_description.clone(),
            generated_at: timestamp(&report.metadata),
            base_score: report.result.base_score_percent,
            weighted_score: report.result.weighted_score_percent,
            band: report.band().label().to_string(),
            matched: keyword_list(&report.result.matched_keywords),
            missing: keyword_list(&report.result.missing_keywords),
            version: report.metadata.version.clone(),
        };
        Ok(template.render()?)
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        let template = HtmlComparisonTemplate {
            job_description: report.job_description.clone(),
            generated_at: timestamp(&report.metadata),
            first_resume: report.first_resume.clone(),
            first_score: report.result.first.base_score_percent,
            first_matched: report.result.first.matched_keywords.join(", "),
            second_resume: report.second_resume.clone(),
            second_score: report.result.second.base_score_percent,
            second_matched: report.result.second.matched_keywords.join(", "),
            verdict: report.result.verdict.message().to_string(),
            version: report.metadata.version.clone(),
        };
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl OutputFormatter for TextFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        Ok(format_ats_report(&report.result))
    }

    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        let result = &report.result;
        Ok(format!(
            "Resume 1 ATS Score: {}%\nResume 1 Matching: {}\nResume 2 ATS Score: {}%\nResume 2 Matching: {}\nVerdict: {}",
            result.first.base_score_percent,
            result.first.matched_keywords.join(", "),
            result.second.base_score_percent,
            result.second.matched_keywords.join(", "),
            result.verdict.message()
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter,
            text_formatter: TextFormatter,
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
            OutputFormat::Text => &self.text_formatter,
        }
    }

    pub fn generate_score(&self, report: &ScoreReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_score(report)
    }

    pub fn generate_comparison(&self, report: &ComparisonReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_comparison(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    if format == OutputFormat::Text && !timestamp {
        return DEFAULT_REPORT_FILENAME.to_string();
    }

    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console | OutputFormat::Text => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_ats{}.html", base_name, timestamp_suffix),
    }
}
