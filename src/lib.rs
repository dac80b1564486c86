//! Headless security input library
//!
//! This library provides the logic behind a password field: a list of
//! security rules evaluated on every change, a strength meter derived from
//! the share of satisfied rules, a mask toggle and a hint list.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use security_input::{FieldConfig, RuleSet, SecurityField, SecurityRule, StrengthBand};
//!
//! let rules = RuleSet::new(vec![
//!     SecurityRule::pattern("has number", "[0-9]").expect("valid pattern"),
//!     SecurityRule::predicate("at least 8 characters", |v| v.chars().count() >= 8),
//! ]);
//!
//! let mut field = SecurityField::builder(FieldConfig::new().mask_content(true).max_length(32))
//!     .rules(rules)
//!     .on_validity_change(|valid| println!("valid: {}", valid))
//!     .mount()
//!     .expect("rules evaluate");
//!
//! field.set_value("hunter2").expect("rules evaluate");
//! assert_eq!(field.meter(), Some(StrengthBand::Low));
//!
//! for hint in field.hints() {
//!     println!("{} {}", if hint.succeeded { "ok" } else { "--" }, hint.hint);
//! }
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod field;
mod icon;
mod rule;
mod score;
mod text;

pub mod presets;

// Public API
pub use blacklist::{Blacklist, BlacklistError};
pub use evaluator::{evaluate, evaluate_field, evaluate_secret, FieldEvaluation};
pub use field::{
    FieldBuilder, FieldConfig, FieldState, HintItem, InputType, SecurityField, ValidityStyle,
};
pub use icon::{resolve_icon, IconCatalog, IconError, IconName, UnicodeIcons};
pub use rule::{
    Condition, PredicateError, PredicateFn, RuleError, RuleResult, RuleSet, SecurityRule,
};
pub use score::{score, StrengthBand, StrengthScore};
pub use text::RenderedText;

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
