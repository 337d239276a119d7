//! Shortlist report assembled from match results for presentation

use crate::config::MatchingConfig;
use crate::matching::{explain, MatchCategory, MatchResults, ScoreBreakdown, ScoredJob};
use crate::profile::{CandidateProfile, ExperienceCategory, SeniorityLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a formatter needs to render one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistReport {
    pub metadata: ReportMetadata,
    pub profile: ProfileSummary,
    pub recommended: Vec<JobEntry>,
    pub worth_exploring: Vec<JobEntry>,
    /// Unranked postings, present only when requested.
    pub other: Vec<JobEntry>,
    pub summary: ShortlistSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub resume_file: String,
    pub job_sources: Vec<String>,
    /// Sources that failed to load and contributed no postings.
    pub failed_sources: Vec<String>,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub primary_title: Option<String>,
    pub primary_type: Option<ExperienceCategory>,
    pub total_years_experience: u32,
    pub seniority_level: SeniorityLevel,
    /// Categories with at least one year.
    pub experience_by_category: BTreeMap<ExperienceCategory, u32>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
}

/// Counts over the full result set, before any display limit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShortlistSummary {
    pub total_postings: usize,
    pub recommended: usize,
    pub worth_exploring: usize,
    pub unranked: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEntry {
    /// 1-based position in the full ranking.
    pub rank: usize,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub url: String,
    pub posted_date: String,
    pub source: String,
    pub scores: ScoreBreakdown,
    pub confidence: f64,
    pub category: MatchCategory,
    pub matched_skills: Vec<String>,
    pub explanation: Vec<String>,
}

/// Inputs that are not part of the match results themselves.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub resume_file: String,
    pub job_sources: Vec<String>,
    pub failed_sources: Vec<String>,
    pub processing_time_ms: u64,
}

impl ProfileSummary {
    pub fn from_profile(profile: &CandidateProfile) -> Self {
        Self {
            primary_title: profile.primary_title().map(str::to_string),
            primary_type: profile.primary_type(),
            total_years_experience: profile.total_years_experience,
            seniority_level: profile.seniority_level,
            experience_by_category: profile
                .experience_by_category
                .iter()
                .filter(|(_, exp)| exp.years > 0)
                .map(|(category, exp)| (*category, exp.years))
                .collect(),
            skills: profile.skills.technical.clone(),
            education: profile.education.clone(),
        }
    }
}

impl ShortlistReport {
    /// Build the report. `max_results` caps each section independently;
    /// counts in `summary` always cover every posting.
    pub fn from_results(
        profile: &CandidateProfile,
        results: &MatchResults,
        options: &MatchingConfig,
        context: ReportContext,
    ) -> Self {
        let entries: Vec<JobEntry> = results
            .all
            .iter()
            .enumerate()
            .map(|(index, job)| JobEntry::new(index + 1, job, profile))
            .collect();

        let section = |category: MatchCategory| -> Vec<JobEntry> {
            entries
                .iter()
                .filter(|entry| entry.category == category)
                .take(options.max_results)
                .cloned()
                .collect()
        };

        let recommended = section(MatchCategory::Recommended);
        let worth_exploring = section(MatchCategory::WorthExploring);
        let other = if options.include_unranked {
            section(MatchCategory::Unranked)
        } else {
            Vec::new()
        };

        let summary = ShortlistSummary {
            total_postings: results.all.len(),
            recommended: results.recommended.len(),
            worth_exploring: results.worth_exploring.len(),
            unranked: results.unranked().count(),
        };

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: context.resume_file,
                job_sources: context.job_sources,
                failed_sources: context.failed_sources,
                processing_time_ms: context.processing_time_ms,
            },
            profile: ProfileSummary::from_profile(profile),
            recommended,
            worth_exploring,
            other,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.worth_exploring.is_empty() && self.other.is_empty()
    }
}

impl JobEntry {
    fn new(rank: usize, job: &ScoredJob, profile: &CandidateProfile) -> Self {
        let posting = &job.posting;
        Self {
            rank,
            title: posting.title.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            salary: posting.salary.clone(),
            url: posting.url.clone(),
            posted_date: posting.posted_date.clone(),
            source: posting.source.clone(),
            scores: job.scores,
            confidence: job.confidence,
            category: job.category,
            matched_skills: job.matched_skills.clone(),
            explanation: explain(job, profile),
        }
    }
}
