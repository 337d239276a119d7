//! Experience score: how the candidate's relevant years sit against the
//! posting's level band, with the career-pivot override applied last.

use crate::lexicon::{contains_any, terms_pattern, DOMAIN_KEYWORDS};
use crate::matching::job::JobPosting;
use crate::profile::CandidateProfile;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Pivot override: applies when total years exceed this...
pub const PIVOT_TOTAL_YEARS: u32 = 5;
/// ...while relevant years stay below this.
pub const PIVOT_RELEVANT_YEARS: u32 = 3;
pub const PIVOT_SENIOR_CAP: u32 = 40;
pub const PIVOT_ENTRY_FLOOR: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Intern,
    Entry,
    Mid,
    Senior,
    Staff,
    Principal,
    Lead,
    Manager,
    Director,
    Vp,
}

/// Title indicators in precedence order; the first hit decides.
static LEVEL_PATTERNS: LazyLock<Vec<(JobLevel, Regex)>> = LazyLock::new(|| {
    let table: &[(JobLevel, &[&str])] = &[
        (JobLevel::Intern, &["intern", "internship"]),
        (JobLevel::Entry, &["junior", "jr", "entry"]),
        (JobLevel::Principal, &["principal"]),
        (JobLevel::Staff, &["staff"]),
        (JobLevel::Senior, &["senior", "sr"]),
        (JobLevel::Lead, &["lead"]),
        (JobLevel::Manager, &["manager"]),
        (JobLevel::Director, &["director"]),
        (JobLevel::Vp, &["vp", "vice president"]),
    ];
    table
        .iter()
        .map(|(level, terms)| {
            let pattern = Regex::new(&terms_pattern(terms)).expect("Invalid level regex");
            (*level, pattern)
        })
        .collect()
});

/// Required-years phrasings, tried in order.
static REQUIRED_YEARS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d{1,2})\s*\+\s*(?:years?|yrs?)",
        r"(?i)(\d{1,2})\s*[-–]\s*\d{1,2}\s*(?:years?|yrs?)",
        r"(?i)minimum\s+(?:of\s+)?(\d{1,2})\s*(?:years?|yrs?)",
        r"(?i)at\s+least\s+(\d{1,2})\s*(?:years?|yrs?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid required years regex"))
    .collect()
});

impl JobLevel {
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        LEVEL_PATTERNS
            .iter()
            .filter(|(level, _)| {
                !(*level == JobLevel::Manager && lower.contains("product manager"))
            })
            .find(|(_, pattern)| pattern.is_match(&lower))
            .map(|(level, _)| *level)
            .unwrap_or(JobLevel::Mid)
    }

    /// Expected (min, max) years for the level.
    pub fn band(self) -> (u32, u32) {
        match self {
            JobLevel::Intern => (0, 0),
            JobLevel::Entry => (0, 2),
            JobLevel::Mid => (2, 5),
            JobLevel::Senior => (5, 10),
            JobLevel::Staff => (7, 15),
            JobLevel::Principal => (10, 20),
            JobLevel::Lead => (5, 15),
            JobLevel::Manager => (5, 15),
            JobLevel::Director => (8, 20),
            JobLevel::Vp => (10, 25),
        }
    }
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobLevel::Intern => "intern",
            JobLevel::Entry => "entry",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Staff => "staff",
            JobLevel::Principal => "principal",
            JobLevel::Lead => "lead",
            JobLevel::Manager => "manager",
            JobLevel::Director => "director",
            JobLevel::Vp => "vp",
        };
        write!(f, "{}", name)
    }
}

/// Minimum years stated in the description, if any phrasing matches.
pub fn required_years(description: &str) -> Option<u32> {
    REQUIRED_YEARS_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(description))
        .and_then(|caps| caps[1].parse().ok())
}

/// Years in the profile category matching the posting's domain, or total
/// years when the title names no domain.
pub fn relevant_experience(job_title: &str, profile: &CandidateProfile) -> u32 {
    let lower = job_title.to_lowercase();
    DOMAIN_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(category, _)| profile.years_in(*category))
        .unwrap_or(profile.total_years_experience)
}

/// Position of `relevant` against the (min, max) band. The checks are
/// order-dependent: perfect fit, close fit, under-qualified, over-qualified.
pub fn band_score(relevant: u32, min: u32, max: u32) -> u32 {
    let (relevant, min, max) = (relevant as i64, min as i64, max as i64);

    let score = if relevant >= min && relevant <= max + 2 {
        100
    } else if relevant >= min - 1 && relevant <= max + 3 {
        80
    } else if relevant < min {
        (70 - 15 * (min - relevant)).max(0)
    } else {
        (90 - 10 * (relevant - max)).max(40)
    };

    score as u32
}

/// Re-rank career pivoters: cap senior-track postings, floor accessible ones.
pub fn apply_pivot_override(score: u32, level: JobLevel, total_years: u32, relevant: u32) -> u32 {
    if total_years <= PIVOT_TOTAL_YEARS || relevant >= PIVOT_RELEVANT_YEARS {
        return score;
    }

    match level {
        JobLevel::Senior | JobLevel::Lead | JobLevel::Manager => score.min(PIVOT_SENIOR_CAP),
        JobLevel::Entry | JobLevel::Mid => score.max(PIVOT_ENTRY_FLOOR),
        _ => score,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceFit {
    pub level: JobLevel,
    pub required_years: u32,
    pub relevant_years: u32,
    pub score: u32,
}

pub fn assess_experience(job: &JobPosting, profile: &CandidateProfile) -> ExperienceFit {
    let level = JobLevel::from_title(&job.title);
    let (band_min, band_max) = level.band();
    let required = required_years(&job.description).unwrap_or(band_min);
    let max = band_max.max(required);
    let relevant = relevant_experience(&job.title, profile);

    let raw = band_score(relevant, required, max);
    let score = apply_pivot_override(raw, level, profile.total_years_experience, relevant);

    ExperienceFit {
        level,
        required_years: required,
        relevant_years: relevant,
        score,
    }
}

pub fn experience_score(job: &JobPosting, profile: &CandidateProfile) -> u32 {
    assess_experience(job, profile).score
}
