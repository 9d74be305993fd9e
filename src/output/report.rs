//! Report structures and the downloadable plain-text ATS report

use crate::processing::comparator::ComparisonResult;
use crate::processing::scorer::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name the plain-text report is offered under when saved without an explicit path
pub const DEFAULT_REPORT_FILENAME: &str = "ATS_Report.txt";

/// Render the four-line ATS report.
pub fn format_ats_report(result: &ScoreResult) -> String {
    format!(
        "ATS Score: {}%\nWeighted ATS Score: {}%\nMatching: {}\nMissing: {}",
        result.base_score_percent,
        result.weighted_score_percent,
        result.matched_keywords.join(", "),
        result.missing_keywords.join(", ")
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Single-resume report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub resume: String,
    pub job_description: String,
    pub result: ScoreResult,
    pub metadata: ReportMetadata,
}

impl ScoreReport {
    pub fn new(resume: impl Into<String>, job_description: impl Into<String>, result: ScoreResult) -> Self {
        Self {
            resume: resume.into(),
            job_description: job_description.into(),
            result,
            metadata: ReportMetadata::now(),
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.result.base_score_percent)
    }
}

/// Two-resume report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first_resume: String,
    pub second_resume: String,
    pub job_description: String,
    pub result: ComparisonResult,
    pub metadata: ReportMetadata,
}

impl ComparisonReport {
    pub fn new(
        first_resume: impl Into<String>,
        second_resume: impl Into<String>,
        job_description: impl Into<String>,
        result: ComparisonResult,
    ) -> Self {
        Self {
            first_resume: first_resume.into(),
            second_resume: second_resume.into(),
            job_description: job_description.into(),
            result,
            metadata: ReportMetadata::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Excellent,
            70..=89 => ScoreBand::Good,
            50..=69 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "POOR",
        }
    }
}
