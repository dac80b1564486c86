//! Ready-made security rules
//!
//! Each preset checks one aspect of password strength and can be mixed
//! freely with caller-defined rules.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::not_common_password;
pub use length::min_length;
pub use pattern::no_repetitive_patterns;
pub use variety::{has_lowercase, has_number, has_special, has_uppercase};

use crate::blacklist::Blacklist;
use crate::rule::{RuleSet, SecurityRule};

/// Length of 8, all four character classes, no obvious patterns.
pub fn recommended() -> RuleSet {
    RuleSet::new(vec![
        min_length(8),
        has_uppercase(),
        has_lowercase(),
        has_number(),
        has_special(),
        no_repetitive_patterns(),
    ])
}

/// [`recommended`] plus a check against `list`.
pub fn recommended_with_blacklist(list: Blacklist) -> RuleSet {
    let mut rules: Vec<SecurityRule> = recommended().to_vec();
    rules.push(not_common_password(list));
    RuleSet::new(rules)
}
