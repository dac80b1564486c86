//! Length preset - minimum number of characters.

use crate::rule::SecurityRule;

/// Requires at least `min` characters (not bytes).
pub fn min_length(min: usize) -> SecurityRule {
    SecurityRule::predicate(format!("at least {} characters", min), move |value| {
        value.chars().count() >= min
    })
}
