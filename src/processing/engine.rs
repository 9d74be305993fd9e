//! Request-level ATS operations: validate inputs, extract, normalize, score

use crate::config::KeywordConfig;
use crate::error::{Result, AtsError};
use crate::input::text_extractor::{Document, DocumentExtractor, TextExtractor};
use crate::processing::comparator::{Comparator, ComparisonResult};
use crate::processing::keywords::{KeywordNormalizer, KeywordSet};
use crate::processing::scorer::{AtsScorer, ScoreResult};
use log::{debug, info};

pub const MISSING_RESUME: &str = "Please upload a resume first";
pub const MISSING_JOB_DESCRIPTION: &str = "Please paste the job description";
pub const MISSING_COMPARISON_RESUMES: &str = "Please upload both resumes to compare";
pub const MISSING_COMPARISON_JOB_DESCRIPTION: &str =
    "Please paste the job description for comparison";

/// Resume presence for single mode, checked before any file is touched.
pub fn require_resume<T>(resume: Option<T>) -> Result<T> {
    resume.ok_or_else(|| AtsError::MissingInput(MISSING_RESUME.to_string()))
}

/// Both resumes for comparison mode, checked before any file is touched.
pub fn require_resume_pair<T>(first: Option<T>, second: Option<T>) -> Result<(T, T)> {
    match (first, second) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(AtsError::MissingInput(MISSING_COMPARISON_RESUMES.to_string())),
    }
}

/// Single-resume outcome, with the extracted text kept for previews.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub resume_text: String,
    pub job_keywords: KeywordSet,
    pub result: ScoreResult,
}

pub struct AtsEngine {
    normalizer: KeywordNormalizer,
    scorer: AtsScorer,
    extractor: Box<dyn TextExtractor + Send + Sync>,
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new(&KeywordConfig::default())
    }
}

impl AtsEngine {
    pub fn new(config: &KeywordConfig) -> Self {
        Self {
            normalizer: KeywordNormalizer::from_config(config),
            scorer: AtsScorer::from_config(config),
            extractor: Box::new(DocumentExtractor),
        }
    }

    /// Swap the document extractor, e.g. for one backed by another parser.
    pub fn with_extractor(mut self, extractor: impl TextExtractor + Send + Sync + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn normalizer(&self) -> &KeywordNormalizer {
        &self.normalizer
    }

    pub fn scorer(&self) -> &AtsScorer {
        &self.scorer
    }

    /// Score one resume. Fails before scoring if an input is missing or the document is unreadable.
    pub fn evaluate(&self, resume: Option<&Document>, job_description: &str) -> Result<Evaluation> {
        let resume = require_resume(resume)?;
        if job_description.trim().is_empty() {
            return Err(AtsError::MissingInput(MISSING_JOB_DESCRIPTION.to_string()));
        }

        let resume_text = self.extractor.extract(resume)?;
        let resume_keywords = self.normalizer.normalize(&resume_text);
        let job_keywords = self.normalizer.normalize(job_description);
        debug!(
            "Resume '{}': {} keywords, job description: {} keywords",
            resume.name(),
            resume_keywords.len(),
            job_keywords.len()
        );

        let result = self.scorer.score(&resume_keywords, &job_keywords);
        info!(
            "Scored '{}': base {}%, weighted {}%",
            resume.name(),
            result.base_score_percent,
            result.weighted_score_percent
        );

        Ok(Evaluation {
            resume_text,
            job_keywords,
            result,
        })
    }

    /// Compare two resumes against one job description.
    pub fn evaluate_pair(
        &self,
        first: Option<&Document>,
        second: Option<&Document>,
        job_description: &str,
    ) -> Result<ComparisonResult> {
        let (first, second) = require_resume_pair(first, second)?;
        if job_description.trim().is_empty() {
            return Err(AtsError::MissingInput(
                MISSING_COMPARISON_JOB_DESCRIPTION.to_string(),
            ));
        }

        let first_text = self.extractor.extract(first)?;
        let second_text = self.extractor.extract(second)?;

        let job_keywords = self.normalizer.normalize(job_description);
        let first_keywords = self.normalizer.normalize(&first_text);
        let second_keywords = self.normalizer.normalize(&second_text);

        let comparison =
            Comparator::new(&self.scorer).compare(&first_keywords, &second_keywords, &job_keywords);
        info!(
            "Compared '{}' ({}%) with '{}' ({}%): {}",
            first.name(),
            comparison.first.base_score_percent,
            second.name(),
            comparison.second.base_score_percent,
            comparison.verdict
        );

        Ok(comparison)
    }
}
