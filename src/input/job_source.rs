//! Job posting sources
//!
//! Each source yields a list of postings. Loading several sources tolerates
//! partial failure: a broken source contributes nothing and is reported
//! back to the caller instead of aborting the batch.

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::matching::JobPosting;
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

pub trait JobSource {
    /// Label used in logs and reports.
    fn name(&self) -> String;

    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<JobPosting>>> + Send;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    List(Vec<JobPosting>),
    Wrapped { jobs: Vec<JobPosting> },
}

/// JSON file holding either an array of postings or `{ "jobs": [...] }`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JobSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<JobPosting>> {
        let content = fs::read_to_string(&self.path).await?;
        let payload: JsonPayload = serde_json::from_str(&content).map_err(|e| {
            ResumeMatcherError::JobSource(format!(
                "Invalid job postings in '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let postings = match payload {
            JsonPayload::List(jobs) | JsonPayload::Wrapped { jobs } => jobs,
        };

        Ok(postings.into_iter().map(JobPosting::with_placeholders).collect())
    }
}

/// CSV file with a header row naming posting fields.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JobSource for CsvFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<JobPosting>> {
        let content = fs::read_to_string(&self.path).await?;
        parse_csv_postings(&content)
    }
}

pub fn parse_csv_postings(content: &str) -> Result<Vec<JobPosting>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut postings = Vec::new();
    for record in reader.deserialize::<JobPosting>() {
        postings.push(record?.with_placeholders());
    }
    Ok(postings)
}

async fn fetch_from<S: JobSource>(source: &S) -> Result<Vec<JobPosting>> {
    debug!("Fetching postings from {}", source.name());
    source.fetch().await
}

/// Postings gathered from every source that loaded, plus the labels of
/// those that did not.
#[derive(Debug, Clone, Default)]
pub struct JobBatch {
    pub postings: Vec<JobPosting>,
    pub failed_sources: Vec<String>,
}

impl JobBatch {
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[derive(Default)]
pub struct JobSourceManager;

impl JobSourceManager {
    pub fn new() -> Self {
        Self
    }

    /// Load one file, picking the source by extension.
    pub async fn load(&self, path: &Path) -> Result<Vec<JobPosting>> {
        match FileType::from_path(path) {
            FileType::Json => fetch_from(&JsonFileSource::new(path)).await,
            FileType::Csv => fetch_from(&CsvFileSource::new(path)).await,
            other => Err(ResumeMatcherError::JobSource(format!(
                "Unsupported job source format {:?}: {}",
                other,
                path.display()
            ))),
        }
    }

    /// Load every path in order. Failures are logged and collected, never
    /// propagated.
    pub async fn load_all(&self, paths: &[PathBuf]) -> JobBatch {
        self.load_all_with(paths, |_| {}).await
    }

    /// Like [`load_all`](Self::load_all), calling `on_source` after each
    /// source finishes, successful or not.
    pub async fn load_all_with<F>(&self, paths: &[PathBuf], mut on_source: F) -> JobBatch
    where
        F: FnMut(&Path),
    {
        let mut batch = JobBatch::default();

        for path in paths {
            let loaded = self.load(path).await;
            on_source(path);
            match loaded {
                Ok(postings) => {
                    debug!("Loaded {} postings from {}", postings.len(), path.display());
                    batch.postings.extend(postings);
                }
                Err(e) => {
                    warn!("Skipping job source {}: {}", path.display(), e);
                    batch.failed_sources.push(path.display().to_string());
                }
            }
        }

        info!(
            "Loaded {} postings from {} sources ({} failed)",
            batch.postings.len(),
            paths.len(),
            batch.failed_sources.len()
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::job::{LOCATION_PLACEHOLDER, SALARY_PLACEHOLDER};
    use tempfile::TempDir;

    #[test]
    fn test_csv_blank_cells_get_placeholders() {
        let csv = "title,company,description,location,salary\n\
                   Data Analyst,Acme,SQL and Tableau,,\n\
                   UX Designer,Globex,Figma,Remote,$120k\n";
        let postings = parse_csv_postings(csv).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].location, LOCATION_PLACEHOLDER);
        assert_eq!(postings[0].salary, SALARY_PLACEHOLDER);
        assert_eq!(postings[1].location, "Remote");
    }

    #[tokio::test]
    async fn test_json_array_and_wrapped_forms() {
        let dir = TempDir::new().unwrap();
        let array = dir.path().join("array.json");
        let wrapped = dir.path().join("wrapped.json");
        std::fs::write(&array, r#"[{"title": "Backend Engineer", "company": "Acme"}]"#).unwrap();
        std::fs::write(
            &wrapped,
            r#"{"jobs": [{"title": "Data Scientist", "company": "Globex", "description": "Python"}]}"#,
        )
        .unwrap();

        let a = JsonFileSource::new(&array).fetch().await.unwrap();
        let w = JsonFileSource::new(&wrapped).fetch().await.unwrap();
        assert_eq!(a[0].title, "Backend Engineer");
        assert_eq!(w[0].description, "Python");
    }

    #[tokio::test]
    async fn test_failed_source_does_not_abort_batch() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"[{"title": "QA Engineer", "company": "Acme"}]"#).unwrap();
        std::fs::write(&bad, "{ not json").unwrap();
        let missing = dir.path().join("missing.csv");

        let batch = JobSourceManager::new()
            .load_all(&[bad.clone(), good, missing.clone()])
            .await;

        assert_eq!(batch.postings.len(), 1);
        assert_eq!(
            batch.failed_sources,
            vec![bad.display().to_string(), missing.display().to_string()]
        );
    }
}
