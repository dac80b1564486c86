//! Blacklist preset - rejects common passwords.

use crate::blacklist::Blacklist;
use crate::rule::SecurityRule;

/// Succeeds when the value is not in `list`.
pub fn not_common_password(list: Blacklist) -> SecurityRule {
    SecurityRule::predicate("not a common password", move |value| !list.contains(value))
}
