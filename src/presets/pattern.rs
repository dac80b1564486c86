//! Pattern preset - rejects repetitive and sequential runs.

use crate::rule::SecurityRule;

const MAX_REPEAT: usize = 2;
const SEQUENCE_WINDOW: usize = 4;

/// Fails on 3+ identical characters in a row ("aaa") or 4+ characters
/// stepping by one in either direction ("1234", "dcba").
pub fn no_repetitive_patterns() -> SecurityRule {
    SecurityRule::predicate("no repetitive or sequential patterns", |value| {
        !has_repetition(value) && !has_sequence(value)
    })
}

fn has_repetition(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    let mut repeated_count = 1;
    for pair in chars.windows(2) {
        if pair[0] == pair[1] {
            repeated_count += 1;
            if repeated_count > MAX_REPEAT {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

fn has_sequence(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.windows(SEQUENCE_WINDOW).any(|window| {
        let ascending = window.windows(2).all(|w| w[1] as i64 == w[0] as i64 + 1);
        let descending = window.windows(2).all(|w| w[1] as i64 == w[0] as i64 - 1);
        ascending || descending
    })
}
