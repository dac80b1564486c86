//! Character variety presets - uppercase, lowercase, numbers, special chars.

use crate::rule::SecurityRule;

pub fn has_uppercase() -> SecurityRule {
    SecurityRule::predicate("one uppercase letter", |value| {
        value.chars().any(|c| c.is_uppercase())
    })
}

pub fn has_lowercase() -> SecurityRule {
    SecurityRule::predicate("one lowercase letter", |value| {
        value.chars().any(|c| c.is_lowercase())
    })
}

pub fn has_number() -> SecurityRule {
    SecurityRule::predicate("one number", |value| value.chars().any(|c| c.is_ascii_digit()))
}

/// Anything that is neither a letter nor a digit counts as special.
pub fn has_special() -> SecurityRule {
    SecurityRule::predicate("one special character", |value| {
        value.chars().any(|c| !c.is_alphanumeric())
    })
}
