//! Error handling for the ATS checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("{0}")]
    MissingInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read document: {0}")]
    CorruptDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl AtsError {
    /// Whether the failure was caused by what the user supplied rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AtsError::MissingInput(_)
                | AtsError::UnsupportedFormat(_)
                | AtsError::CorruptDocument(_)
                | AtsError::InvalidInput(_)
        )
    }
}

impl From<askama::Error> for AtsError {
    fn from(err: askama::Error) -> Self {
        AtsError::OutputFormatting(err.to_string())
    }
}
