//! File type detection

use std::fmt;
use std::path::Path;

/// Declared format of an uploaded resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Other(String),
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            other => DocumentFormat::Other(other.to_string()),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_else(|| DocumentFormat::Other(String::new()))
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Other(ext) if ext.is_empty() => write!(f, "<none>"),
            DocumentFormat::Other(ext) => write!(f, "{}", ext),
        }
    }
}

/// Format of a job description file
#[derive(Debug, Clone, PartialEq)]
pub enum JobFileType {
    Text,
    Markdown,
    Unknown,
}

impl JobFileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => JobFileType::Text,
            "md" | "markdown" => JobFileType::Markdown,
            _ => JobFileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_format_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("Docx"), DocumentFormat::Docx);
        assert_eq!(
            DocumentFormat::from_extension("doc"),
            DocumentFormat::Other("doc".to_string())
        );
    }

    #[test]
    fn test_document_format_from_path_without_extension() {
        let format = DocumentFormat::from_path(Path::new("resume"));
        assert_eq!(format, DocumentFormat::Other(String::new()));
        assert_eq!(format.to_string(), "<none>");
    }

    #[test]
    fn test_job_file_type() {
        assert_eq!(JobFileType::from_extension("txt"), JobFileType::Text);
        assert_eq!(JobFileType::from_extension("markdown"), JobFileType::Markdown);
        assert_eq!(JobFileType::from_extension("pdf"), JobFileType::Unknown);
    }
}
