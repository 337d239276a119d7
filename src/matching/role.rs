//! Role score: a discrete ladder comparing the posting title with the
//! candidate's primary and historical titles. Never zero.

use crate::lexicon::{canonical_role, contains_any, related_keywords, role_families};
use crate::profile::CandidateProfile;

pub const PRIMARY_MATCH: u32 = 100;
pub const HISTORICAL_MATCH: u32 = 85;
pub const SAME_FAMILY: u32 = 70;
pub const RELATED_TYPE: u32 = 50;
pub const NO_MATCH: u32 = 20;

fn title_tokens(title: &str) -> Vec<&str> {
    title
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Whether `needle`'s tokens appear as a contiguous run in `haystack`'s.
fn contains_tokens(haystack: &[&str], needle: &[&str]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Whole-token containment either way, or both titles resolving to the same
/// canonical synonym entry.
pub fn titles_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    let (a_tokens, b_tokens) = (title_tokens(&a), title_tokens(&b));
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return false;
    }
    if contains_tokens(&a_tokens, &b_tokens) || contains_tokens(&b_tokens, &a_tokens) {
        return true;
    }
    match (canonical_role(&a), canonical_role(&b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

pub fn role_score(job_title: &str, profile: &CandidateProfile) -> u32 {
    let Some(primary) = profile.primary_role.as_ref() else {
        return NO_MATCH;
    };

    if titles_match(job_title, &primary.title) {
        return PRIMARY_MATCH;
    }

    if profile.roles.iter().any(|role| titles_match(job_title, &role.title)) {
        return HISTORICAL_MATCH;
    }

    let job_lower = job_title.to_lowercase();
    let primary_families = role_families(&primary.title.to_lowercase());
    if role_families(&job_lower)
        .iter()
        .any(|family| primary_families.contains(family))
    {
        return SAME_FAMILY;
    }

    if let Some(role_type) = primary.role_type {
        if contains_any(&job_lower, related_keywords(role_type)) {
            return RELATED_TYPE;
        }
    }

    NO_MATCH
}
