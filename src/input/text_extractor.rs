//! Resume text decoding from the supported file formats

use crate::error::{Result, ResumeMatcherError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeMatcherError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Flatten markdown to plain text, one block per line. Line structure
/// matters downstream since roles and dates are read line by line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => flush_line(&mut current, &mut lines),
            Event::Start(Tag::Item) => flush_line(&mut current, &mut lines),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::TableCell) => flush_line(&mut current, &mut lines),
            _ => {}
        }
    }
    flush_line(&mut current, &mut lines);

    lines.join("\n")
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_keeps_line_structure() {
        let md = "# Jane Doe\n\n## Experience\n\n\
                  **Senior Software Engineer** at Acme\n2019 - 2024\n\n\
                  - Python\n- Docker\n";
        let text = markdown_to_text(md);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Jane Doe",
                "Experience",
                "Senior Software Engineer at Acme",
                "2019 - 2024",
                "Python",
                "Docker",
            ]
        );
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Data Analyst 2020 - 2024").unwrap();

        let text = PlainTextExtractor.extract(&path).await.unwrap();
        assert_eq!(text, "Data Analyst 2020 - 2024");
    }
}
