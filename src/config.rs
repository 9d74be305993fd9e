//! Configuration management for the ATS checker

use crate::error::{Result, AtsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STOPWORDS: [&str; 11] = [
    "and", "or", "the", "a", "an", "in", "on", "with", "for", "to", "of",
];

pub const DEFAULT_PRIORITY_KEYWORDS: [&str; 4] = ["python", "java", "sql", "aws"];

pub const DEFAULT_PRIORITY_BONUS: u8 = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keywords: KeywordConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Words dropped during normalization
    pub stopwords: Vec<String>,
    /// Skills that add a bonus to the weighted score when matched
    pub priority_keywords: Vec<String>,
    /// Percentage points added per matched priority keyword
    pub priority_bonus: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub include_timestamp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Text,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            priority_keywords: DEFAULT_PRIORITY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            priority_bonus: DEFAULT_PRIORITY_BONUS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            include_timestamp: false,
        }
    }
}

impl Config {
    /// Missing file means defaults; nothing is written.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AtsError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-checker")
            .join("config.toml")
    }
}
