//! Candidate profile data model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Experience category a role title can count toward. Classification is
/// set-valued: one title may belong to several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceCategory {
    Engineering,
    Product,
    Design,
    Data,
    Management,
}

impl ExperienceCategory {
    pub const ALL: [ExperienceCategory; 5] = [
        ExperienceCategory::Engineering,
        ExperienceCategory::Product,
        ExperienceCategory::Design,
        ExperienceCategory::Data,
        ExperienceCategory::Management,
    ];
}

impl std::fmt::Display for ExperienceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceCategory::Engineering => write!(f, "Engineering"),
            ExperienceCategory::Product => write!(f, "Product"),
            ExperienceCategory::Design => write!(f, "Design"),
            ExperienceCategory::Data => write!(f, "Data"),
            ExperienceCategory::Management => write!(f, "Management"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeniorityLevel {
    Entry,
    Mid,
    Senior,
    Manager,
}

impl SeniorityLevel {
    /// Year-based fallback when the text carries no seniority indicator.
    pub fn from_years(total_years: u32) -> Self {
        match total_years {
            0..=2 => SeniorityLevel::Entry,
            3..=5 => SeniorityLevel::Mid,
            6..=10 => SeniorityLevel::Senior,
            _ => SeniorityLevel::Manager,
        }
    }
}

impl std::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeniorityLevel::Entry => write!(f, "entry"),
            SeniorityLevel::Mid => write!(f, "mid"),
            SeniorityLevel::Senior => write!(f, "senior"),
            SeniorityLevel::Manager => write!(f, "manager"),
        }
    }
}

/// One role found in the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub title: String,
    /// `None` when no date range was found on the role line.
    pub years: Option<u32>,
    pub company: Option<String>,
    pub raw_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExperience {
    pub years: u32,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryRole {
    /// Category with the most summed years; `None` when no role was categorised.
    #[serde(rename = "type")]
    pub role_type: Option<ExperienceCategory>,
    /// Title of the first (most recent) role, whatever its category.
    pub title: String,
    pub years_in_role: u32,
}

/// Structured profile built once per resume and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Resume order, which is taken as recency order.
    pub roles: Vec<RoleRecord>,
    pub experience_by_category: BTreeMap<ExperienceCategory, CategoryExperience>,
    /// Sum of category years, capped at [`MAX_TOTAL_YEARS`].
    pub total_years_experience: u32,
    pub skills: Skills,
    pub seniority_level: SeniorityLevel,
    pub education: Vec<String>,
    pub primary_role: Option<PrimaryRole>,
    pub keywords: Vec<String>,
}

pub const MAX_TOTAL_YEARS: u32 = 30;
pub const MAX_KEYWORDS: usize = 50;

impl CandidateProfile {
    pub fn years_in(&self, category: ExperienceCategory) -> u32 {
        self.experience_by_category
            .get(&category)
            .map(|c| c.years)
            .unwrap_or(0)
    }

    pub fn primary_title(&self) -> Option<&str> {
        self.primary_role.as_ref().map(|p| p.title.as_str())
    }

    pub fn primary_type(&self) -> Option<ExperienceCategory> {
        self.primary_role.as_ref().and_then(|p| p.role_type)
    }

    pub fn has_skills(&self) -> bool {
        !self.skills.technical.is_empty()
    }
}
