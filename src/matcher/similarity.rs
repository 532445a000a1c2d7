//! Character-level string similarity.

use similar::TextDiff;

/// Similarity ratio in `[0, 1]`: `2 * matches / (len(a) + len(b))`, where
/// `matches` is the number of characters kept by a character diff of the two
/// strings. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Highest ratio two strings of these character lengths could reach.
///
/// Used to skip diffs that cannot clear a floor, which keeps very long
/// messages cheap to score.
pub fn ratio_upper_bound(a_chars: usize, b_chars: usize) -> f64 {
    let total = a_chars + b_chars;
    if total == 0 {
        return 1.0;
    }
    2.0 * a_chars.min(b_chars) as f64 / total as f64
}
