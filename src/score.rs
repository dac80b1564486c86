//! Strength scoring - aggregates rule results into a percentage.

use crate::rule::RuleResult;

/// Coarse classification of a strength percentage, used by the meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrengthBand {
    None,
    Low,
    Middle,
    High,
}

impl StrengthBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => StrengthBand::None,
            1..=50 => StrengthBand::Low,
            51..=99 => StrengthBand::Middle,
            _ => StrengthBand::High,
        }
    }

    /// Lowercase name, as used for meter styling.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthBand::None => "none",
            StrengthBand::Low => "low",
            StrengthBand::Middle => "middle",
            StrengthBand::High => "high",
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Share of satisfied rules, `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Builds a score from a raw percentage, clamped to 100.
    pub fn new(percentage: u8) -> Self {
        Self(percentage.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_percentage(self.0)
    }

    pub fn is_fully_satisfied(&self) -> bool {
        self.0 == 100
    }
}

/// Scores a list of rule results.
///
/// Returns `None` for an empty list: without rules there is no meter.
/// The percentage is `100 * succeeded / total` rounded half up. With more
/// than 200 rules rounding alone could reach 0 or 100 on a partial result;
/// those ends stay reserved for "none passed" and "all passed".
pub fn score(results: &[RuleResult]) -> Option<StrengthScore> {
    let total = results.len();
    if total == 0 {
        return None;
    }
    let succeeded = results.iter().filter(|r| r.succeeded).count();
    // round(100 * s / t) == floor((200 * s + t) / (2 * t))
    let mut percentage = (200 * succeeded + total) / (2 * total);
    if succeeded < total {
        percentage = percentage.min(99);
    }
    if succeeded > 0 {
        percentage = percentage.max(1);
    }
    Some(StrengthScore::new(percentage as u8))
}
