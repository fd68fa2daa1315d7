//! Similarity scoring between header text and field aliases.
//!
//! Tiered rather than edit-distance based: exact normalized equality, then
//! containment, then word overlap. Vendor headers tend to be short multi-word
//! labels, where shared whole words discriminate better than character
//! similarity ("order qty" vs "order quantity").

use crate::normalize::normalize_header;

/// Minimum fuzzy score for a header to be accepted as a match.
pub const MATCH_THRESHOLD: f64 = 0.8;

/// Scores two strings after normalization.
///
/// - `1.0` for equality
/// - `0.9` when one contains the other
/// - `0.5 + 0.4 * (shared words / max word count)` when any word overlaps
/// - `0.0` otherwise, and always `0.0` when either side normalizes to empty
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let s1 = normalize_header(a);
    let s2 = normalize_header(b);
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return 1.0;
    }
    if s1.contains(&s2) || s2.contains(&s1) {
        return 0.9;
    }
    let words1: Vec<&str> = s1.split(' ').collect();
    let words2: Vec<&str> = s2.split(' ').collect();
    let shared = words1.iter().filter(|word| words2.contains(word)).count();
    if shared > 0 {
        0.5 + 0.4 * shared as f64 / words1.len().max(words2.len()) as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_scores_one() {
        assert_eq!(similarity("Unit Cost", "unit_cost"), 1.0);
    }

    #[test]
    fn containment_scores_point_nine() {
        assert_eq!(similarity("wholesale price usd", "wholesale price"), 0.9);
        assert_eq!(similarity("qty", "total qty"), 0.9);
    }

    #[test]
    fn word_overlap_blends_toward_half() {
        // one of two words shared: 0.5 + 0.4 * 1/2
        let score = similarity("order value", "order amount");
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("color", "weight"), 0.0);
    }

    #[test]
    fn empty_input_never_matches() {
        assert_eq!(similarity("", "cost"), 0.0);
        assert_eq!(similarity("  ", "cost"), 0.0);
        assert_eq!(similarity("cost", ""), 0.0);
    }
}
