//! Input manager routing resume files to the right extractor

use crate::error::{ParseError, Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Decode a resume file to text. Extensions other than pdf, txt and md
    /// fail with [`ParseError::UnsupportedFormat`] before the file is touched.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let file_type = FileType::from_path(path);
        if !file_type.is_resume_format() {
            return Err(unsupported_format(path));
        }

        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            _ => return Err(unsupported_format(path)),
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn unsupported_format(path: &Path) -> ResumeMatcherError {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("none")
        .to_string();
    ParseError::UnsupportedFormat(ext).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_cache_toggle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.md");
        std::fs::write(&path, "# Experience\n\nUX Designer 2019 - 2024\n").unwrap();

        let mut cached = InputManager::new();
        cached.extract_text(&path).await.unwrap();
        cached.extract_text(&path).await.unwrap();
        assert_eq!(cached.cache_size(), 1);

        let mut uncached = InputManager::new().with_cache(false);
        uncached.extract_text(&path).await.unwrap();
        assert_eq!(uncached.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_format_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, "binary").unwrap();

        let err = InputManager::new().extract_text(&path).await.unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("docx"));
    }

    #[tokio::test]
    async fn test_format_is_checked_before_existence() {
        let err = InputManager::new()
            .extract_text(Path::new("/nonexistent/resume.docx"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResumeMatcherError::Parse(ParseError::UnsupportedFormat(ref ext)) if ext == "docx"
        ));

        let err = InputManager::new()
            .extract_text(Path::new("/nonexistent/resume"))
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = InputManager::new()
            .extract_text(Path::new("/nonexistent/resume.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeMatcherError::InvalidInput(_)));
    }
}
