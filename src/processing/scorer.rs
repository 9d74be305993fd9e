//! ATS (Applicant Tracking System) keyword scoring

use crate::config::KeywordConfig;
use crate::processing::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub matched_keywords: KeywordSet,
    pub missing_keywords: KeywordSet,
    /// Share of JD keywords found in the resume, floored to a whole percent
    pub base_score_percent: u8,
    /// Base score plus the priority bonus, capped at 100
    pub weighted_score_percent: u8,
}

pub struct AtsScorer {
    priority_keywords: KeywordSet,
    priority_bonus: u8,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::from_config(&KeywordConfig::default())
    }
}

impl AtsScorer {
    pub fn new(priority_keywords: KeywordSet, priority_bonus: u8) -> Self {
        Self {
            priority_keywords,
            priority_bonus,
        }
    }

    pub fn from_config(config: &KeywordConfig) -> Self {
        let priority_keywords = config
            .priority_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self::new(priority_keywords, config.priority_bonus)
    }

    pub fn priority_keywords(&self) -> &KeywordSet {
        &self.priority_keywords
    }

    pub fn priority_bonus(&self) -> u8 {
        self.priority_bonus
    }

    /// Score `resume` against `job`. Not symmetric: the denominator is the JD keyword count.
    pub fn score(&self, resume: &KeywordSet, job: &KeywordSet) -> ScoreResult {
        let matched_keywords = resume.intersection(job);
        let missing_keywords = job.difference(resume);

        let base_score_percent = Self::base_score(matched_keywords.len(), job.len());

        let priority_hits = matched_keywords.overlap(&self.priority_keywords);
        let bonus = priority_hits.saturating_mul(self.priority_bonus as usize);
        let weighted = (base_score_percent as usize).saturating_add(bonus).min(100);

        ScoreResult {
            matched_keywords,
            missing_keywords,
            base_score_percent,
            weighted_score_percent: weighted as u8,
        }
    }

    fn base_score(matched: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        // Integer floor; matched <= total keeps this within 0..=100
        ((matched * 100) / total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::keywords::KeywordNormalizer;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_python_aws_sql_scenario() {
        let normalizer = KeywordNormalizer::default();
        let scorer = AtsScorer::default();

        let resume = normalizer.normalize("Experienced Python developer with AWS and SQL skills");
        let job = normalizer.normalize("Looking for Python, AWS, SQL, Java experience");
        let result = scorer.score(&resume, &job);

        assert_eq!(result.matched_keywords, set(&["python", "aws", "sql"]));
        assert_eq!(
            result.missing_keywords,
            set(&["looking", "java", "experience"])
        );
        assert_eq!(result.base_score_percent, 50);
        assert_eq!(result.weighted_score_percent, 56);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let scorer = AtsScorer::default();
        let result = scorer.score(&set(&["python", "aws"]), &KeywordSet::new());

        assert_eq!(result.base_score_percent, 0);
        assert_eq!(result.weighted_score_percent, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let scorer = AtsScorer::default();
        let job = set(&["python", "docker"]);
        let result = scorer.score(&KeywordSet::new(), &job);

        assert_eq!(result.base_score_percent, 0);
        assert_eq!(result.missing_keywords, job);
    }

    #[test]
    fn test_base_score_floors() {
        let scorer = AtsScorer::default();
        // 2 of 3 is 66.67%
        let result = scorer.score(&set(&["a1", "b1"]), &set(&["a1", "b1", "c1"]));
        assert_eq!(result.base_score_percent, 66);

        // 29 of 100: floating point would give 28.999...
        let job: KeywordSet = (0..100).map(|i| format!("k{}", i)).collect();
        let resume: KeywordSet = (0..29).map(|i| format!("k{}", i)).collect();
        assert_eq!(scorer.score(&resume, &job).base_score_percent, 29);
    }

    #[test]
    fn test_weighted_score_is_capped() {
        let scorer = AtsScorer::default();
        let job = set(&["python", "java", "sql", "aws"]);
        let result = scorer.score(&job, &job);

        assert_eq!(result.base_score_percent, 100);
        assert_eq!(result.weighted_score_percent, 100);
    }

    #[test]
    fn test_weighted_never_below_base() {
        let scorer = AtsScorer::default();
        let job = set(&["rust", "go", "python", "kubernetes", "java"]);
        for resume in [
            set(&[]),
            set(&["rust"]),
            set(&["python", "java"]),
            set(&["rust", "go", "python", "kubernetes", "java"]),
        ] {
            let result = scorer.score(&resume, &job);
            assert!(result.weighted_score_percent >= result.base_score_percent);
            assert!(result.weighted_score_percent <= 100);
            assert!(result.base_score_percent <= 100);
        }
    }

    #[test]
    fn test_scoring_is_asymmetric() {
        let scorer = AtsScorer::default();
        let resume = set(&["python", "rust", "docker", "linux"]);
        let job = set(&["python", "rust"]);

        let forward = scorer.score(&resume, &job);
        let backward = scorer.score(&job, &resume);

        assert_eq!(forward.matched_keywords, backward.matched_keywords);
        assert_eq!(forward.base_score_percent, 100);
        assert_eq!(backward.base_score_percent, 50);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_score_is_idempotent() {
        let scorer = AtsScorer::default();
        let resume = set(&["python", "sql", "teamwork"]);
        let job = set(&["python", "sql", "aws", "communication"]);

        assert_eq!(scorer.score(&resume, &job), scorer.score(&resume, &job));
    }

    #[test]
    fn test_custom_priority_keywords() {
        let config = KeywordConfig {
            priority_keywords: vec!["Rust".to_string()],
            priority_bonus: 10,
            ..KeywordConfig::default()
        };
        let scorer = AtsScorer::from_config(&config);
        let result = scorer.score(&set(&["rust"]), &set(&["rust", "go"]));

        assert_eq!(result.base_score_percent, 50);
        assert_eq!(result.weighted_score_percent, 60);
        assert_eq!(result.matched_keywords.intersection(scorer.priority_keywords()), set(&["rust"]));
    }
}
