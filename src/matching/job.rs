//! Job posting input records and scored output records

use serde::{Deserialize, Serialize};

pub const LOCATION_PLACEHOLDER: &str = "Location not specified";
pub const SALARY_PLACEHOLDER: &str = "Salary not disclosed";
pub const POSTED_DATE_PLACEHOLDER: &str = "Recently posted";
pub const URL_PLACEHOLDER: &str = "#";
pub const SOURCE_PLACEHOLDER: &str = "Unknown";

/// A posting as delivered by a job source. Only `title` and `company` are
/// required; everything else falls back to a display placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_salary")]
    pub salary: String,
    #[serde(default = "default_posted_date", alias = "postedDate")]
    pub posted_date: String,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_location() -> String {
    LOCATION_PLACEHOLDER.to_string()
}

fn default_url() -> String {
    URL_PLACEHOLDER.to_string()
}

fn default_salary() -> String {
    SALARY_PLACEHOLDER.to_string()
}

fn default_posted_date() -> String {
    POSTED_DATE_PLACEHOLDER.to_string()
}

fn default_source() -> String {
    SOURCE_PLACEHOLDER.to_string()
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
            location: default_location(),
            url: default_url(),
            salary: default_salary(),
            posted_date: default_posted_date(),
            source: default_source(),
        }
    }

    /// Replace blank optional fields with their placeholders. Sources such as
    /// CSV deliver empty cells rather than missing fields.
    pub fn with_placeholders(mut self) -> Self {
        fill_blank(&mut self.location, LOCATION_PLACEHOLDER);
        fill_blank(&mut self.url, URL_PLACEHOLDER);
        fill_blank(&mut self.salary, SALARY_PLACEHOLDER);
        fill_blank(&mut self.posted_date, POSTED_DATE_PLACEHOLDER);
        fill_blank(&mut self.source, SOURCE_PLACEHOLDER);
        self
    }

    /// Title and description, the text every content check runs against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

fn fill_blank(field: &mut String, placeholder: &str) {
    if field.trim().is_empty() {
        *field = placeholder.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCategory {
    Recommended,
    WorthExploring,
    Unranked,
}

impl std::fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchCategory::Recommended => write!(f, "Recommended"),
            MatchCategory::WorthExploring => write!(f, "Worth Exploring"),
            MatchCategory::Unranked => write!(f, "Unranked"),
        }
    }
}

/// Sub-scores are 0-100; `total` is their weighted sum rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role: u32,
    pub experience: u32,
    pub content: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub scores: ScoreBreakdown,
    /// Display-only remap of `scores.total`; never used for ranking.
    pub confidence: f64,
    pub category: MatchCategory,
    /// Candidate skills found in the posting text.
    pub matched_skills: Vec<String>,
}

/// Engine output. `all` holds every posting, stably sorted by total descending;
/// the other two views are disjoint subsets of it in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResults {
    pub recommended: Vec<ScoredJob>,
    pub worth_exploring: Vec<ScoredJob>,
    pub all: Vec<ScoredJob>,
}

impl MatchResults {
    pub fn unranked(&self) -> impl Iterator<Item = &ScoredJob> {
        self.all
            .iter()
            .filter(|job| job.category == MatchCategory::Unranked)
    }
}
