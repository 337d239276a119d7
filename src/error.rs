//! Error handling for the resume matcher

use thiserror::Error;

/// Fatal profile extraction failure. No partial profile is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("resume text is empty")]
    EmptyInput,

    #[error("unsupported resume format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl ResumeMatcherError {
    /// True when the failure came from the resume itself rather than from I/O.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ResumeMatcherError::Parse(_))
    }
}
