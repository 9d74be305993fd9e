//! Input manager for reading resumes and job descriptions from disk

use crate::error::{Result, AtsError};
use crate::input::file_detector::{DocumentFormat, JobFileType};
use crate::input::text_extractor::{markdown_to_text, Document};
use log::info;
use std::path::Path;
use tokio::fs;

/// Reads user-supplied files. Holds no state between calls.
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume file into a [`Document`], tagging it with the format its extension declares.
    pub async fn load_document(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = DocumentFormat::from_path(path);
        info!("Reading {} document: {}", format, path.display());

        let content = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Document::new(name, content, format))
    }

    /// Read a job description from a `.txt` or `.md` file.
    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| AtsError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        match JobFileType::from_extension(extension) {
            JobFileType::Text => {
                info!("Reading plain text job description: {}", path.display());
                Ok(fs::read_to_string(path).await?)
            }
            JobFileType::Markdown => {
                info!("Processing markdown job description: {}", path.display());
                let markdown = fs::read_to_string(path).await?;
                Ok(markdown_to_text(&markdown))
            }
            JobFileType::Unknown => Err(AtsError::UnsupportedFormat(format!(
                "Job description must be .txt or .md: {}",
                path.display()
            ))),
        }
    }
}
