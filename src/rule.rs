//! Security rules - the named checks applied to a field value.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use regex::Regex;
use thiserror::Error;

/// Error returned by a fallible predicate.
///
/// A predicate that fails is a broken rule, not a weak value: the error is
/// propagated to the caller instead of being counted as a failed check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PredicateError(pub String);

impl PredicateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid pattern for rule '{hint}': {source}")]
    InvalidPattern {
        hint: String,
        #[source]
        source: regex::Error,
    },
    #[error("Predicate for rule '{hint}' failed: {source}")]
    Predicate {
        hint: String,
        #[source]
        source: PredicateError,
    },
}

/// Boxed predicate stored inside a [`Condition::Predicate`].
pub type PredicateFn = Arc<dyn Fn(&str) -> Result<bool, PredicateError> + Send + Sync>;

/// How a rule decides whether a value passes.
#[derive(Clone)]
pub enum Condition {
    /// Succeeds when the regex matches anywhere in the value.
    Pattern(Regex),
    /// Succeeds when the predicate returns `Ok(true)`.
    Predicate(PredicateFn),
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A named check applied to a text value.
#[derive(Clone, Debug)]
pub struct SecurityRule {
    hint: String,
    condition: Condition,
}

impl SecurityRule {
    /// Builds a pattern rule, compiling `pattern` up front.
    ///
    /// # Errors
    /// Returns [`RuleError::InvalidPattern`] if the pattern does not compile,
    /// so a malformed rule is caught at setup time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use security_input::SecurityRule;
    ///
    /// let rule = SecurityRule::pattern("has number", "[0-9]").unwrap();
    /// assert!(rule.check("abc1").unwrap());
    /// assert!(SecurityRule::pattern("broken", "[0-9").is_err());
    /// ```
    pub fn pattern(hint: impl Into<String>, pattern: &str) -> Result<Self, RuleError> {
        let hint = hint.into();
        match Regex::new(pattern) {
            Ok(re) => Ok(Self::regex(hint, re)),
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Rule '{}' has an invalid pattern: {}", hint, source);
                Err(RuleError::InvalidPattern { hint, source })
            }
        }
    }

    /// Builds a pattern rule from an already compiled regex.
    pub fn regex(hint: impl Into<String>, regex: Regex) -> Self {
        Self {
            hint: hint.into(),
            condition: Condition::Pattern(regex),
        }
    }

    /// Builds an infallible predicate rule.
    pub fn predicate<F>(hint: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::try_predicate(hint, move |value| Ok(predicate(value)))
    }

    /// Builds a predicate rule whose check may fail.
    pub fn try_predicate<F>(hint: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        Self {
            hint: hint.into(),
            condition: Condition::Predicate(Arc::new(predicate)),
        }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Runs the condition against `value`.
    pub fn check(&self, value: &str) -> Result<bool, RuleError> {
        match &self.condition {
            Condition::Pattern(re) => Ok(re.is_match(value)),
            Condition::Predicate(predicate) => {
                predicate(value).map_err(|source| RuleError::Predicate {
                    hint: self.hint.clone(),
                    source,
                })
            }
        }
    }
}

/// Outcome of one rule for the current value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleResult {
    pub hint: String,
    pub succeeded: bool,
}

/// Ordered, shareable list of rules.
///
/// Cloning is cheap, so one set can back many fields.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Arc<[SecurityRule]>,
}

impl RuleSet {
    pub fn new(rules: Vec<SecurityRule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// Compiles a list of `(hint, pattern)` pairs.
    pub fn from_patterns<H, P>(
        patterns: impl IntoIterator<Item = (H, P)>,
    ) -> Result<Self, RuleError>
    where
        H: Into<String>,
        P: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|(hint, pattern)| SecurityRule::pattern(hint, pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl Deref for RuleSet {
    type Target = [SecurityRule];

    fn deref(&self) -> &Self::Target {
        &self.rules
    }
}

impl From<Vec<SecurityRule>> for RuleSet {
    fn from(rules: Vec<SecurityRule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<SecurityRule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = SecurityRule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
