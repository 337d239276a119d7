use crate::matching::job::ScoredJob;
use crate::profile::CandidateProfile;

/// Short human-readable reasons for a score, always in role, experience,
/// skills order. Empty when no sub-score clears a threshold.
pub fn explain(job: &ScoredJob, profile: &CandidateProfile) -> Vec<String> {
    let mut reasons = Vec::new();
    let scores = &job.scores;

    let primary_title = profile.primary_title().unwrap_or("your background");
    if scores.role >= 85 {
        reasons.push(format!("Strong role match with your experience as {}", primary_title));
    } else if scores.role >= 60 {
        reasons.push(format!("Related to your {} background", primary_title));
    }

    if scores.experience >= 80 {
        reasons.push("Your experience level fits this role well".to_string());
    } else if scores.experience >= 60 {
        reasons.push("Accessible entry point given your overall experience".to_string());
    } else if scores.experience < 50 {
        reasons.push("Experience level may be a stretch for this role".to_string());
    }

    if scores.content >= 70 {
        if job.matched_skills.is_empty() {
            reasons.push("Good overall skills alignment".to_string());
        } else {
            let shown: Vec<&str> = job.matched_skills.iter().take(5).map(String::as_str).collect();
            reasons.push(format!("Matches your skills: {}", shown.join(", ")));
        }
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::job::{JobPosting, MatchCategory, ScoreBreakdown};
    use crate::profile::ProfileExtractor;

    fn scored(role: u32, experience: u32, content: u32, skills: &[&str]) -> ScoredJob {
        ScoredJob {
            posting: JobPosting::new("Backend Engineer", "Acme", ""),
            scores: ScoreBreakdown {
                role,
                experience,
                content,
                total: 0.0,
            },
            confidence: 0.0,
            category: MatchCategory::Unranked,
            matched_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_reasons_follow_fixed_order() {
        let profile = ProfileExtractor::with_current_year(2024)
            .extract("Software Engineer 2018 - 2024")
            .unwrap();
        let reasons = explain(&scored(100, 100, 80, &["Python", "Docker"]), &profile);
        assert_eq!(reasons.len(), 3);
        assert!(reasons[0].contains("Software Engineer"));
        assert!(reasons[1].contains("experience level fits"));
        assert_eq!(reasons[2], "Matches your skills: Python, Docker");
    }

    #[test]
    fn test_thresholds_gate_reasons() {
        let profile = ProfileExtractor::with_current_year(2024)
            .extract("Software Engineer 2018 - 2024")
            .unwrap();

        let reasons = explain(&scored(70, 70, 50, &[]), &profile);
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].starts_with("Related to"));
        assert!(reasons[1].starts_with("Accessible"));

        // role 20, experience in the 50..60 gap, content below 70
        assert!(explain(&scored(20, 55, 60, &[]), &profile).is_empty());

        let reasons = explain(&scored(20, 40, 60, &[]), &profile);
        assert_eq!(reasons, vec!["Experience level may be a stretch for this role"]);
    }
}
