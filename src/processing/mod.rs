//! Keyword extraction, scoring and comparison

pub mod keywords;
pub mod scorer;
pub mod comparator;
pub mod engine;

pub use comparator::{Comparator, ComparisonResult, Verdict};
pub use engine::{AtsEngine, Evaluation};
pub use keywords::{KeywordNormalizer, KeywordSet};
pub use scorer::{AtsScorer, ScoreResult};
