//! Display confidence and categorisation. Ranking never reads these.

use crate::matching::job::MatchCategory;
use crate::matching::round2;

pub const CONFIDENCE_CAP: f64 = 95.0;
pub const RECOMMENDED_MIN: f64 = 90.0;
pub const WORTH_EXPLORING_MIN: f64 = 70.0;

/// Piecewise-linear remap of a weighted total onto 0-95, continuous at the
/// band edges 40, 60 and 85.
pub fn confidence(total: f64) -> f64 {
    let raw = if total >= 85.0 {
        (90.0 + (total - 85.0) * 0.33).min(CONFIDENCE_CAP)
    } else if total >= 60.0 {
        70.0 + (total - 60.0) * 0.76
    } else if total >= 40.0 {
        50.0 + (total - 40.0) * 0.95
    } else {
        total.max(0.0) * 1.25
    };
    round2(raw)
}

pub fn categorize(confidence: f64) -> MatchCategory {
    if (RECOMMENDED_MIN..=CONFIDENCE_CAP).contains(&confidence) {
        MatchCategory::Recommended
    } else if (WORTH_EXPLORING_MIN..RECOMMENDED_MIN).contains(&confidence) {
        MatchCategory::WorthExploring
    } else {
        MatchCategory::Unranked
    }
}
