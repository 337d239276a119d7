use crate::matching::confidence::{categorize, confidence};
use crate::matching::content::assess_content;
use crate::matching::experience::experience_score;
use crate::matching::job::{JobPosting, MatchCategory, MatchResults, ScoreBreakdown, ScoredJob};
use crate::matching::role::role_score;
use crate::matching::round2;
use crate::profile::CandidateProfile;
use log::{debug, info};

pub const ROLE_WEIGHT: f64 = 0.40;
pub const EXPERIENCE_WEIGHT: f64 = 0.35;
pub const CONTENT_WEIGHT: f64 = 0.25;

/// Scores postings against a profile. Stateless; one engine can serve any
/// number of profiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchEngine;

impl MatchEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score_job(&self, profile: &CandidateProfile, job: &JobPosting) -> ScoredJob {
        let role = role_score(&job.title, profile);
        let experience = experience_score(job, profile);
        let content = assess_content(job, profile);

        let total = round2(
            ROLE_WEIGHT * role as f64
                + EXPERIENCE_WEIGHT * experience as f64
                + CONTENT_WEIGHT * content.score as f64,
        );
        let confidence = confidence(total);
        let category = categorize(confidence);

        debug!(
            "Scored '{}' at {}: role {}, experience {}, content {}, total {}, confidence {}",
            job.title, job.company, role, experience, content.score, total, confidence
        );

        ScoredJob {
            posting: job.clone(),
            scores: ScoreBreakdown {
                role,
                experience,
                content: content.score,
                total,
            },
            confidence,
            category,
            matched_skills: content.matched_skills,
        }
    }

    /// Score every posting, then split into the recommended and
    /// worth-exploring views. `all` keeps input order among equal totals.
    pub fn match_jobs(&self, profile: &CandidateProfile, postings: &[JobPosting]) -> MatchResults {
        let mut all: Vec<ScoredJob> = postings
            .iter()
            .map(|job| self.score_job(profile, job))
            .collect();

        // sort_by is stable
        all.sort_by(|a, b| b.scores.total.total_cmp(&a.scores.total));

        let recommended: Vec<ScoredJob> = all
            .iter()
            .filter(|job| job.category == MatchCategory::Recommended)
            .cloned()
            .collect();
        let worth_exploring: Vec<ScoredJob> = all
            .iter()
            .filter(|job| job.category == MatchCategory::WorthExploring)
            .cloned()
            .collect();

        info!(
            "Matched {} postings: {} recommended, {} worth exploring",
            all.len(),
            recommended.len(),
            worth_exploring.len()
        );

        MatchResults {
            recommended,
            worth_exploring,
            all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileExtractor;

    fn profile() -> CandidateProfile {
        ProfileExtractor::with_current_year(2024)
            .extract("Software Engineer 2018 - 2024\nSkills: Python, Docker, AWS")
            .unwrap()
    }

    #[test]
    fn test_weighted_total() {
        let job = JobPosting::new(
            "Software Engineer",
            "Acme",
            "3+ years building Python services on AWS with Docker.",
        );
        let scored = MatchEngine::new().score_job(&profile(), &job);
        assert_eq!(scored.scores.role, 100);
        assert_eq!(scored.scores.experience, 100);
        assert_eq!(scored.scores.content, 100);
        assert_eq!(scored.scores.total, 100.0);
        assert_eq!(scored.category, MatchCategory::Recommended);
    }

    #[test]
    fn test_weights_are_pinned() {
        assert_eq!((ROLE_WEIGHT, EXPERIENCE_WEIGHT, CONTENT_WEIGHT), (0.40, 0.35, 0.25));

        // role 20, experience 100, content 75
        let job = JobPosting::new("Barista", "Cafe", "Make coffee");
        let scored = MatchEngine::new().score_job(&profile(), &job);
        assert_eq!(
            (scored.scores.role, scored.scores.experience, scored.scores.content),
            (20, 100, 75)
        );
        assert_eq!(scored.scores.total, 61.75);
        assert_eq!(scored.confidence, 71.33);
        assert_eq!(scored.category, MatchCategory::WorthExploring);
    }

    #[test]
    fn test_every_posting_is_returned_sorted() {
        let jobs = vec![
            JobPosting::new("Barista", "Cafe", "Make coffee"),
            JobPosting::new("Software Engineer", "Acme", "Python and Docker"),
            JobPosting::new("Barista", "Other Cafe", "Make coffee"),
        ];
        let results = MatchEngine::new().match_jobs(&profile(), &jobs);

        assert_eq!(results.all.len(), jobs.len());
        assert_eq!(results.all[0].posting.title, "Software Engineer");
        assert!(results
            .all
            .windows(2)
            .all(|w| w[0].scores.total >= w[1].scores.total));
        // equal totals keep input order
        assert_eq!(results.all[1].posting.company, "Cafe");
        assert_eq!(results.all[2].posting.company, "Other Cafe");
    }

    #[test]
    fn test_views_are_disjoint_subsets() {
        let jobs = vec![
            JobPosting::new("Software Engineer", "Acme", "Python"),
            JobPosting::new("Senior Data Scientist", "Globex", "SQL and Tableau"),
            JobPosting::new("Product Manager", "Initech", ""),
        ];
        let results = MatchEngine::new().match_jobs(&profile(), &jobs);

        for job in &results.recommended {
            assert!(!results.worth_exploring.contains(job));
            assert!(results.all.contains(job));
        }
        for job in &results.worth_exploring {
            assert!(results.all.contains(job));
        }
    }

    #[test]
    fn test_empty_postings() {
        let results = MatchEngine::new().match_jobs(&profile(), &[]);
        assert!(results.all.is_empty());
        assert!(results.recommended.is_empty());
    }
}
