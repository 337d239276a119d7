//! Matching module
//! Scores job postings against a candidate profile and ranks them

pub mod confidence;
pub mod content;
pub mod engine;
pub mod experience;
pub mod explain;
pub mod job;
pub mod role;

pub use engine::MatchEngine;
pub use experience::JobLevel;
pub use explain::explain;
pub use job::{JobPosting, MatchCategory, MatchResults, ScoreBreakdown, ScoredJob};

use crate::profile::CandidateProfile;

/// Score and rank `postings` for `profile` with a default engine.
pub fn match_jobs(profile: &CandidateProfile, postings: &[JobPosting]) -> MatchResults {
    MatchEngine::new().match_jobs(profile, postings)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
