//! Content score: overlap between the candidate's skills and the posting
//! text, normalised by how many reference terms the posting mentions.

use crate::lexicon::{contains_word, on_word_boundary, REFERENCE_TERMS};
use crate::matching::job::JobPosting;
use crate::profile::CandidateProfile;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const NO_REQUIREMENTS_WITH_SKILLS: u32 = 75;
pub const NO_REQUIREMENTS_NO_SKILLS: u32 = 50;
const OVERLAP_MULTIPLIER: f64 = 120.0;

static REFERENCE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(REFERENCE_TERMS)
        .expect("Invalid reference term set")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMatch {
    pub score: u32,
    /// Candidate skills present in the posting, in profile order.
    pub matched_skills: Vec<String>,
    /// Distinct reference terms present in the posting.
    pub reference_hits: usize,
}

/// Number of distinct reference terms standing as whole words in `text`.
/// "javascript" registers only itself, not "java".
pub fn reference_hits(text: &str) -> usize {
    REFERENCE_MATCHER
        .find_overlapping_iter(text)
        .filter(|mat| on_word_boundary(text, mat.start(), mat.end()))
        .map(|mat| mat.pattern())
        .collect::<HashSet<_>>()
        .len()
}

pub fn assess_content(job: &JobPosting, profile: &CandidateProfile) -> ContentMatch {
    let text = job.searchable_text();
    let lower = text.to_lowercase();

    let matched_skills: Vec<String> = profile
        .skills
        .technical
        .iter()
        .filter(|skill| contains_word(&lower, &skill.to_lowercase()))
        .cloned()
        .collect();

    let hits = reference_hits(&text);

    let score = if hits == 0 {
        if profile.has_skills() {
            NO_REQUIREMENTS_WITH_SKILLS
        } else {
            NO_REQUIREMENTS_NO_SKILLS
        }
    } else {
        let ratio = OVERLAP_MULTIPLIER * matched_skills.len() as f64 / hits as f64;
        (ratio.round() as u32).min(100)
    };

    ContentMatch {
        score,
        matched_skills,
        reference_hits: hits,
    }
}

pub fn content_score(job: &JobPosting, profile: &CandidateProfile) -> u32 {
    assess_content(job, profile).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileExtractor;

    fn profile(text: &str) -> CandidateProfile {
        ProfileExtractor::with_current_year(2024).extract(text).unwrap()
    }

    #[test]
    fn test_reference_hits_are_distinct() {
        assert_eq!(reference_hits("Python, python and PYTHON"), 1);
        assert_eq!(reference_hits("JavaScript"), 1);
        assert_eq!(reference_hits("JavaScript and Java"), 2);
        assert_eq!(reference_hits("Great culture"), 0);
    }

    #[test]
    fn test_no_reference_terms_is_neutral() {
        let skilled = profile("Software Engineer 2020 - 2024\nSkills: Python, Docker");
        let unskilled = profile("Software Engineer 2020 - 2024");
        let job = JobPosting::new("Account Executive", "Acme", "Great culture and snacks.");

        assert_eq!(content_score(&job, &skilled), NO_REQUIREMENTS_WITH_SKILLS);
        assert_eq!(content_score(&job, &unskilled), NO_REQUIREMENTS_NO_SKILLS);
    }

    #[test]
    fn test_overlap_ratio_with_multiplier() {
        let p = profile("Software Engineer 2020 - 2024\nSkills: Python, Docker");
        // python, docker, kubernetes, aws => 4 reference hits, 2 matched
        let job = JobPosting::new(
            "Backend Engineer",
            "Acme",
            "We run Python services in Docker on Kubernetes and AWS.",
        );
        let result = assess_content(&job, &p);
        assert_eq!(result.reference_hits, 4);
        assert_eq!(result.matched_skills, vec!["Python", "Docker"]);
        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_score_capped_at_hundred() {
        let p = profile("Software Engineer 2020 - 2024\nSkills: Python, Flask, Django");
        let job = JobPosting::new("Python Developer", "Acme", "Flask and Django services");
        assert_eq!(content_score(&job, &p), 100);
    }

    #[test]
    fn test_words_inside_longer_words_are_not_hits() {
        assert_eq!(reference_hits("Excellent communication in a digital storefront"), 0);
        assert_eq!(reference_hits("Rapid, scalable growth; interest in trust"), 0);

        let p = profile("Software Engineer 2020 - 2024\nSkills: Git, Excel");
        let job = JobPosting::new(
            "Store Associate",
            "Acme",
            "Excellent communication in a digital storefront",
        );
        let result = assess_content(&job, &p);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.reference_hits, 0);
        assert_eq!(result.score, NO_REQUIREMENTS_WITH_SKILLS);
    }
}
