//! Profile extraction module
//! Turns decoded resume text into a structured candidate profile

pub mod extractor;
pub mod model;
pub mod normalize;

pub use extractor::ProfileExtractor;
pub use model::{
    CandidateProfile, CategoryExperience, ExperienceCategory, PrimaryRole, RoleRecord,
    SeniorityLevel, Skills,
};

use crate::error::ParseError;

/// Extract a profile with an extractor anchored to the current calendar year.
pub fn extract_profile(raw_text: &str) -> Result<CandidateProfile, ParseError> {
    ProfileExtractor::new().extract(raw_text)
}
