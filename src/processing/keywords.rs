//! Keyword normalization

use crate::config::KeywordConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

/// Deduplicated, lowercase keywords. Iterates in sorted order so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }

    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        self.0.intersection(&other.0).cloned().collect()
    }

    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Number of keywords shared with `other`, without building the intersection.
    pub fn overlap(&self, other: &KeywordSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(separator)
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}

/// Lowercases, strips punctuation, splits on whitespace and drops stopwords.
pub struct KeywordNormalizer {
    stopwords: KeywordSet,
    strip_regex: Regex,
}

impl Default for KeywordNormalizer {
    fn default() -> Self {
        Self::from_config(&KeywordConfig::default())
    }
}

impl KeywordNormalizer {
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        // Anything outside ASCII letters, digits and whitespace is deleted, not replaced
        let strip_regex = Regex::new(r"[^a-zA-Z0-9\s]+").expect("Invalid strip regex");

        Self {
            stopwords,
            strip_regex,
        }
    }

    pub fn from_config(config: &KeywordConfig) -> Self {
        Self::new(&config.stopwords)
    }

    pub fn stopwords(&self) -> &KeywordSet {
        &self.stopwords
    }

    pub fn normalize(&self, text: &str) -> KeywordSet {
        let lowered = text.to_lowercase();
        let stripped = self.strip_regex.replace_all(&lowered, "");

        stripped
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}
