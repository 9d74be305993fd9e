//! Two-resume comparison against one job description

use crate::processing::keywords::KeywordSet;
use crate::processing::scorer::{AtsScorer, ScoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    FirstBetter,
    SecondBetter,
    Tie,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::FirstBetter => "Resume 1 is a better match",
            Verdict::SecondBetter => "Resume 2 is a better match",
            Verdict::Tie => "Both resumes match equally",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub first: ScoreResult,
    pub second: ScoreResult,
    pub verdict: Verdict,
}

/// Decides between two resumes on base score alone; the priority bonus never breaks ties.
pub struct Comparator<'a> {
    scorer: &'a AtsScorer,
}

impl<'a> Comparator<'a> {
    pub fn new(scorer: &'a AtsScorer) -> Self {
        Self { scorer }
    }

    pub fn compare(&self, first: &KeywordSet, second: &KeywordSet, job: &KeywordSet) -> ComparisonResult {
        let first = self.scorer.score(first, job);
        let second = self.scorer.score(second, job);

        let verdict = match first.base_score_percent.cmp(&second.base_score_percent) {
            std::cmp::Ordering::Greater => Verdict::FirstBetter,
            std::cmp::Ordering::Less => Verdict::SecondBetter,
            std::cmp::Ordering::Equal => Verdict::Tie,
        };

        ComparisonResult {
            first,
            second,
            verdict,
        }
    }
}
