//! Form field controller - owns the state of one security input.
//!
//! The controller is headless: it keeps the value, mask flag, character
//! count and last rule results, and exposes what a UI layer needs to draw
//! the label, input, visibility toggle, strength meter, counter, hint list
//! and error text.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_field;
use crate::icon::IconName;
use crate::rule::{RuleError, RuleResult, RuleSet};
use crate::score::{StrengthBand, StrengthScore};
use crate::text::RenderedText;

/// Static configuration of a field.
pub struct FieldConfig {
    /// Initial value, evaluated once on mount.
    pub default_value: SecretString,
    pub label: RenderedText,
    pub placeholder: String,
    /// Initial mask state.
    pub mask_content: bool,
    pub visibility_toggle: bool,
    /// Maximum accepted characters; longer input is truncated.
    pub max_length: Option<usize>,
    pub show_remaining_characters: bool,
    pub show_security_hints: bool,
    pub error_message: RenderedText,
    /// Validity decided by the caller, drives success/error styling.
    pub is_valid: Option<bool>,
    pub test_id: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            default_value: SecretString::new(String::new().into()),
            label: RenderedText::default(),
            placeholder: String::new(),
            mask_content: false,
            visibility_toggle: false,
            max_length: None,
            show_remaining_characters: false,
            show_security_hints: true,
            error_message: RenderedText::default(),
            is_valid: None,
            test_id: "wizard-input".to_string(),
        }
    }
}

impl Clone for FieldConfig {
    fn clone(&self) -> Self {
        Self {
            default_value: SecretString::new(self.default_value.expose_secret().into()),
            label: self.label.clone(),
            placeholder: self.placeholder.clone(),
            mask_content: self.mask_content,
            visibility_toggle: self.visibility_toggle,
            max_length: self.max_length,
            show_remaining_characters: self.show_remaining_characters,
            show_security_hints: self.show_security_hints,
            error_message: self.error_message.clone(),
            is_valid: self.is_valid,
            test_id: self.test_id.clone(),
        }
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("default_value", &self.default_value)
            .field("label", &self.label)
            .field("placeholder", &self.placeholder)
            .field("mask_content", &self.mask_content)
            .field("visibility_toggle", &self.visibility_toggle)
            .field("max_length", &self.max_length)
            .field("show_remaining_characters", &self.show_remaining_characters)
            .field("show_security_hints", &self.show_security_hints)
            .field("error_message", &self.error_message)
            .field("is_valid", &self.is_valid)
            .field("test_id", &self.test_id)
            .finish()
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.default_value = SecretString::new(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<RenderedText>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn mask_content(mut self, masked: bool) -> Self {
        self.mask_content = masked;
        self
    }

    pub fn visibility_toggle(mut self, enabled: bool) -> Self {
        self.visibility_toggle = enabled;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn show_remaining_characters(mut self, show: bool) -> Self {
        self.show_remaining_characters = show;
        self
    }

    pub fn show_security_hints(mut self, show: bool) -> Self {
        self.show_security_hints = show;
        self
    }

    pub fn error_message(mut self, message: impl Into<RenderedText>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn is_valid(mut self, valid: Option<bool>) -> Self {
        self.is_valid = valid;
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = id.into();
        self
    }
}

/// Mutable per-instance state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub characters_count: usize,
    pub masked: bool,
    pub results: Vec<RuleResult>,
    /// `None` until rules have been evaluated, and always without rules.
    pub score: Option<StrengthScore>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Password,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Password => "password",
            InputType::Text => "text",
        }
    }
}

/// Styling of the input container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidityStyle {
    Neutral,
    Success,
    Error,
}

/// One entry of the hint list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintItem {
    pub hint: String,
    pub succeeded: bool,
    pub icon: IconName,
}

type ChangeCallback = Box<dyn FnMut(&str)>;
type ValidityCallback = Box<dyn FnMut(bool)>;
type VisibilityIconFn = Box<dyn Fn(bool) -> IconName>;

/// Builder for a [`SecurityField`], used to attach callbacks before mount.
pub struct FieldBuilder {
    config: FieldConfig,
    rules: Option<RuleSet>,
    on_change: Option<ChangeCallback>,
    on_validity_change: Option<ValidityCallback>,
    visibility_icon: Option<VisibilityIconFn>,
}

impl FieldBuilder {
    pub fn rules(mut self, rules: impl Into<RuleSet>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Called with the accepted (possibly truncated) value on every change.
    pub fn on_change<F: FnMut(&str) + 'static>(mut self, f: F) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called with "all rules satisfied" after every evaluation.
    pub fn on_validity_change<F: FnMut(bool) + 'static>(mut self, f: F) -> Self {
        self.on_validity_change = Some(Box::new(f));
        self
    }

    /// Picks the toggle icon from the mask flag, replacing the eye icons.
    pub fn visibility_icon<F: Fn(bool) -> IconName + 'static>(mut self, f: F) -> Self {
        self.visibility_icon = Some(Box::new(f));
        self
    }

    /// Creates the field and, when a default value is set, evaluates it once.
    pub fn mount(self) -> Result<SecurityField, RuleError> {
        let mut field = SecurityField {
            state: FieldState {
                masked: self.config.mask_content,
                ..FieldState::default()
            },
            value: SecretString::new(String::new().into()),
            rules: self.rules.filter(|rules| !rules.is_empty()),
            config: self.config,
            on_change: self.on_change,
            on_validity_change: self.on_validity_change,
            visibility_icon: self.visibility_icon,
        };

        if !field.config.default_value.expose_secret().is_empty() {
            let default_value =
                SecretString::new(field.config.default_value.expose_secret().into());
            field.update_feedback(default_value.expose_secret())?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Mounted field '{}' with {} rules",
            field.config.test_id,
            field.rules.as_ref().map_or(0, |r| r.len())
        );

        Ok(field)
    }
}

/// Interactive security input.
pub struct SecurityField {
    config: FieldConfig,
    rules: Option<RuleSet>,
    value: SecretString,
    state: FieldState,
    on_change: Option<ChangeCallback>,
    on_validity_change: Option<ValidityCallback>,
    visibility_icon: Option<VisibilityIconFn>,
}

impl fmt::Debug for SecurityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityField")
            .field("config", &self.config)
            .field("rules", &self.rules)
            .field("value", &self.value)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SecurityField {
    pub fn builder(config: FieldConfig) -> FieldBuilder {
        FieldBuilder {
            config,
            rules: None,
            on_change: None,
            on_validity_change: None,
            visibility_icon: None,
        }
    }

    /// Mounts a field without callbacks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use security_input::{FieldConfig, RuleSet, SecurityField, StrengthBand};
    ///
    /// let rules = RuleSet::from_patterns([("has number", "[0-9]")]).unwrap();
    /// let mut field = SecurityField::mount(FieldConfig::new(), Some(rules)).unwrap();
    /// field.set_value("abc1").unwrap();
    /// assert_eq!(field.meter(), Some(StrengthBand::High));
    /// ```
    pub fn mount(config: FieldConfig, rules: Option<RuleSet>) -> Result<Self, RuleError> {
        let mut builder = Self::builder(config);
        builder.rules = rules;
        builder.mount()
    }

    /// Handles a raw input change.
    ///
    /// The value is truncated to `max_length` characters before anything
    /// else sees it. With rules configured, they are evaluated and the
    /// validity callback receives the outcome; then the change callback
    /// receives the accepted value.
    ///
    /// # Errors
    /// A failing predicate is returned and the state is left untouched.
    pub fn set_value(&mut self, raw: &str) -> Result<&FieldState, RuleError> {
        let accepted = truncate_chars(raw, self.config.max_length);
        self.update_feedback(accepted)?;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(accepted);
        }
        Ok(&self.state)
    }

    fn update_feedback(&mut self, value: &str) -> Result<(), RuleError> {
        let value = truncate_chars(value, self.config.max_length);

        let evaluation = match &self.rules {
            Some(rules) => Some(evaluate_field(value, rules)?),
            None => None,
        };

        self.value = SecretString::new(value.to_string().into());
        self.state.characters_count = value.chars().count();

        if let Some(evaluation) = evaluation {
            let valid = evaluation.is_fully_satisfied();
            self.state.results = evaluation.results;
            self.state.score = evaluation.score;
            if let Some(on_validity_change) = self.on_validity_change.as_mut() {
                on_validity_change(valid);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Field '{}' updated: {} characters, score {:?}",
            self.config.test_id,
            self.state.characters_count,
            self.state.score.map(|s| s.value())
        );

        Ok(())
    }

    /// Flips the mask flag. Nothing is re-evaluated.
    pub fn toggle_mask(&mut self) -> bool {
        self.state.masked = !self.state.masked;
        self.state.masked
    }

    /// Updates the caller-controlled validity flag.
    pub fn set_is_valid(&mut self, valid: Option<bool>) {
        self.config.is_valid = valid;
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn has_rules(&self) -> bool {
        self.rules.is_some()
    }

    pub fn is_fully_satisfied(&self) -> bool {
        self.state.score.is_some_and(|s| s.is_fully_satisfied())
    }

    pub fn input_type(&self) -> InputType {
        if self.state.masked {
            InputType::Password
        } else {
            InputType::Text
        }
    }

    /// Icon for the visibility toggle, `None` when the toggle is disabled.
    pub fn visibility_icon(&self) -> Option<IconName> {
        if !self.config.visibility_toggle {
            return None;
        }
        if let Some(pick) = &self.visibility_icon {
            return Some(pick(self.state.masked));
        }
        Some(if self.state.masked {
            IconName::Eye
        } else {
            IconName::EyeSlash
        })
    }

    /// Meter band; `None` when the field has no rules.
    pub fn meter(&self) -> Option<StrengthBand> {
        if self.rules.is_none() {
            return None;
        }
        Some(self.state.score.map_or(StrengthBand::None, |s| s.band()))
    }

    /// `"count/max"`, shown only when enabled and a maximum is configured.
    pub fn remaining_characters(&self) -> Option<String> {
        if !self.config.show_remaining_characters {
            return None;
        }
        self.config
            .max_length
            .map(|max| format!("{}/{}", self.state.characters_count, max))
    }

    pub fn hints(&self) -> Vec<HintItem> {
        if !self.config.show_security_hints {
            return Vec::new();
        }
        self.state
            .results
            .iter()
            .map(|r| HintItem {
                hint: r.hint.clone(),
                succeeded: r.succeeded,
                icon: if r.succeeded {
                    IconName::Check
                } else {
                    IconName::Times
                },
            })
            .collect()
    }

    /// Rendered label; `None` when empty.
    pub fn label(&self) -> Option<String> {
        non_empty(&self.config.label)
    }

    /// Rendered error text; `None` when empty.
    pub fn error_message(&self) -> Option<String> {
        non_empty(&self.config.error_message)
    }

    pub fn validity_style(&self) -> ValidityStyle {
        match self.config.is_valid {
            Some(true) => ValidityStyle::Success,
            Some(false) => ValidityStyle::Error,
            None => ValidityStyle::Neutral,
        }
    }

    /// Exposes the value, for submitting the form.
    pub fn expose_value(&self) -> &str {
        self.value.expose_secret()
    }
}

fn non_empty(text: &RenderedText) -> Option<String> {
    let rendered = text.render();
    (!rendered.is_empty()).then_some(rendered)
}

fn truncate_chars(value: &str, max: Option<usize>) -> &str {
    match max.and_then(|max| value.char_indices().nth(max)) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{PredicateError, SecurityRule};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn number_and_uppercase() -> RuleSet {
        RuleSet::from_patterns([("has number", "[0-9]"), ("has uppercase", "[A-Z]")]).unwrap()
    }

    fn flags(state: &FieldState) -> Vec<bool> {
        state.results.iter().map(|r| r.succeeded).collect()
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("mycharacters", Some(5)), "mycha");
        assert_eq!(truncate_chars("abc", Some(5)), "abc");
        assert_eq!(truncate_chars("ééééé", Some(2)), "éé");
        assert_eq!(truncate_chars("abc", None), "abc");
        assert_eq!(truncate_chars("abc", Some(0)), "");
    }

    #[test]
    fn test_scenario_number_and_uppercase() {
        let mut field =
            SecurityField::mount(FieldConfig::new(), Some(number_and_uppercase())).unwrap();

        let state = field.set_value("mytext").unwrap();
        assert_eq!(flags(state), [false, false]);
        assert_eq!(state.score.unwrap().value(), 0);
        assert_eq!(field.meter(), Some(StrengthBand::None));

        let state = field.set_value("mytext9").unwrap();
        assert_eq!(flags(state), [true, false]);
        assert_eq!(state.score.unwrap().value(), 50);
        assert_eq!(field.meter(), Some(StrengthBand::Low));

        let state = field.set_value("myText9").unwrap();
        assert_eq!(flags(state), [true, true]);
        assert_eq!(state.score.unwrap().value(), 100);
        assert_eq!(field.meter(), Some(StrengthBand::High));
        assert!(field.is_fully_satisfied());
    }

    #[test]
    fn test_truncation_before_evaluation() {
        let changed = Rc::new(RefCell::new(Vec::<String>::new()));
        let changed_cb = changed.clone();
        let rules = RuleSet::new(vec![SecurityRule::predicate("at most 5", |v| {
            v.chars().count() <= 5
        })]);

        let mut field = SecurityField::builder(FieldConfig::new().max_length(5))
            .rules(rules)
            .on_change(move |v| changed_cb.borrow_mut().push(v.to_string()))
            .mount()
            .unwrap();

        let state = field.set_value("mycharacters").unwrap();
        assert_eq!(state.characters_count, 5);
        assert_eq!(flags(state), [true]);
        assert_eq!(field.expose_value(), "mycha");
        assert_eq!(*changed.borrow(), ["mycha"]);
    }

    #[test]
    fn test_mask_toggle_does_not_recompute() {
        let mut field = SecurityField::mount(
            FieldConfig::new().mask_content(true).visibility_toggle(true),
            Some(number_and_uppercase()),
        )
        .unwrap();
        field.set_value("mytext9").unwrap();
        let before = field.state().clone();

        assert_eq!(field.input_type(), InputType::Password);
        assert_eq!(field.visibility_icon(), Some(IconName::Eye));

        assert!(!field.toggle_mask());
        assert_eq!(field.input_type(), InputType::Text);
        assert_eq!(field.visibility_icon(), Some(IconName::EyeSlash));
        assert_eq!(field.state().characters_count, before.characters_count);
        assert_eq!(field.state().results, before.results);
        assert_eq!(field.state().score, before.score);

        assert!(field.toggle_mask());
        assert_eq!(field.state(), &before);
    }

    #[test]
    fn test_validity_callback() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls_cb = calls.clone();
        let mut field = SecurityField::builder(FieldConfig::new())
            .rules(number_and_uppercase())
            .on_validity_change(move |valid| calls_cb.borrow_mut().push(valid))
            .mount()
            .unwrap();

        field.set_value("mytext9").unwrap();
        field.set_value("myText9").unwrap();
        field.toggle_mask();
        assert_eq!(*calls.borrow(), [false, true]);
    }

    #[test]
    fn test_mount_with_default_value_evaluates_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let calls_cb = calls.clone();
        let changes = Rc::new(RefCell::new(0));
        let changes_cb = changes.clone();

        let field = SecurityField::builder(FieldConfig::new().default_value("myText9"))
            .rules(number_and_uppercase())
            .on_validity_change(move |valid| calls_cb.borrow_mut().push(valid))
            .on_change(move |_| *changes_cb.borrow_mut() += 1)
            .mount()
            .unwrap();

        assert_eq!(field.state().characters_count, 7);
        assert_eq!(field.state().score.unwrap().value(), 100);
        assert_eq!(*calls.borrow(), [true]);
        assert_eq!(*changes.borrow(), 0);
    }

    #[test]
    fn test_mount_default_value_is_truncated() {
        let field = SecurityField::mount(
            FieldConfig::new().default_value("mycharacters").max_length(5),
            None,
        )
        .unwrap();
        assert_eq!(field.expose_value(), "mycha");
        assert_eq!(field.state().characters_count, 5);
    }

    #[test]
    fn test_without_rules_strength_is_inactive() {
        let mut field = SecurityField::mount(FieldConfig::new(), None).unwrap();
        let state = field.set_value("whatever").unwrap();
        assert_eq!(state.characters_count, 8);
        assert!(state.results.is_empty());
        assert_eq!(state.score, None);
        assert_eq!(field.meter(), None);
        assert!(field.hints().is_empty());
        assert!(!field.has_rules());
    }

    #[test]
    fn test_empty_rule_set_is_treated_as_no_rules() {
        let field = SecurityField::mount(FieldConfig::new(), Some(RuleSet::default())).unwrap();
        assert!(!field.has_rules());
        assert_eq!(field.meter(), None);
    }

    #[test]
    fn test_meter_before_first_input() {
        let field = SecurityField::mount(FieldConfig::new(), Some(number_and_uppercase())).unwrap();
        assert_eq!(field.meter(), Some(StrengthBand::None));
        assert!(field.hints().is_empty());
    }

    #[test]
    fn test_failing_predicate_leaves_state_untouched() {
        let rules = RuleSet::new(vec![
            SecurityRule::pattern("has number", "[0-9]").unwrap(),
            SecurityRule::try_predicate("needs data", |v| {
                if v.len() > 3 {
                    Err(PredicateError::new("lookup failed"))
                } else {
                    Ok(true)
                }
            }),
        ]);
        let mut field = SecurityField::mount(FieldConfig::new(), Some(rules)).unwrap();
        field.set_value("ab1").unwrap();
        let before = field.state().clone();

        let result = field.set_value("abc12");
        assert!(matches!(result, Err(RuleError::Predicate { .. })));
        assert_eq!(field.state(), &before);
        assert_eq!(field.expose_value(), "ab1");
    }

    #[test]
    fn test_failing_predicate_on_mount() {
        let rules = RuleSet::new(vec![SecurityRule::try_predicate("broken", |_| {
            Err(PredicateError::new("boom"))
        })]);
        let result = SecurityField::mount(FieldConfig::new().default_value("x"), Some(rules));
        assert!(result.is_err());
    }

    #[test]
    fn test_hints() {
        let mut field =
            SecurityField::mount(FieldConfig::new(), Some(number_and_uppercase())).unwrap();
        field.set_value("mytext9").unwrap();
        assert_eq!(
            field.hints(),
            vec![
                HintItem {
                    hint: "has number".to_string(),
                    succeeded: true,
                    icon: IconName::Check,
                },
                HintItem {
                    hint: "has uppercase".to_string(),
                    succeeded: false,
                    icon: IconName::Times,
                },
            ]
        );
    }

    #[test]
    fn test_hints_hidden() {
        let mut field = SecurityField::mount(
            FieldConfig::new().show_security_hints(false),
            Some(number_and_uppercase()),
        )
        .unwrap();
        field.set_value("mytext9").unwrap();
        assert!(field.hints().is_empty());
        assert_eq!(field.state().results.len(), 2);
    }

    #[test]
    fn test_remaining_characters() {
        let mut field = SecurityField::mount(
            FieldConfig::new().max_length(10).show_remaining_characters(true),
            None,
        )
        .unwrap();
        assert_eq!(field.remaining_characters(), Some("0/10".to_string()));
        field.set_value("hello").unwrap();
        assert_eq!(field.remaining_characters(), Some("5/10".to_string()));

        let field = SecurityField::mount(FieldConfig::new().show_remaining_characters(true), None)
            .unwrap();
        assert_eq!(field.remaining_characters(), None);
    }

    #[test]
    fn test_debug_redacts_default_value() {
        let field = SecurityField::mount(
            FieldConfig::new().default_value("hunter2secret"),
            Some(number_and_uppercase()),
        )
        .unwrap();
        let dbg = format!("{:?}", field);
        assert!(!dbg.contains("hunter2secret"), "{}", dbg);
        assert!(!format!("{:?}", field.config().clone()).contains("hunter2secret"));
        assert_eq!(field.config().default_value.expose_secret(), "hunter2secret");
    }

    #[test]
    fn test_visibility_icon_override() {
        let mut field = SecurityField::builder(FieldConfig::new().visibility_toggle(true))
            .visibility_icon(|masked| if masked { IconName::Times } else { IconName::Check })
            .mount()
            .unwrap();
        assert_eq!(field.visibility_icon(), Some(IconName::Check));
        field.toggle_mask();
        assert_eq!(field.visibility_icon(), Some(IconName::Times));
    }

    #[test]
    fn test_visibility_icon_override_needs_toggle() {
        let field = SecurityField::builder(FieldConfig::new())
            .visibility_icon(|_| IconName::Check)
            .mount()
            .unwrap();
        assert_eq!(field.visibility_icon(), None);
    }

    #[test]
    fn test_visibility_icon_disabled() {
        let field = SecurityField::mount(FieldConfig::new().mask_content(true), None).unwrap();
        assert_eq!(field.visibility_icon(), None);
        assert_eq!(field.input_type(), InputType::Password);
    }

    #[test]
    fn test_label_and_error_message() {
        let field = SecurityField::mount(
            FieldConfig::new()
                .label("Password")
                .error_message(RenderedText::dynamic(|| "Too weak".to_string())),
            None,
        )
        .unwrap();
        assert_eq!(field.label(), Some("Password".to_string()));
        assert_eq!(field.error_message(), Some("Too weak".to_string()));

        let field = SecurityField::mount(FieldConfig::new(), None).unwrap();
        assert_eq!(field.label(), None);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_validity_style() {
        let mut field = SecurityField::mount(FieldConfig::new(), None).unwrap();
        assert_eq!(field.validity_style(), ValidityStyle::Neutral);
        field.set_is_valid(Some(true));
        assert_eq!(field.validity_style(), ValidityStyle::Success);
        field.set_is_valid(Some(false));
        assert_eq!(field.validity_style(), ValidityStyle::Error);
    }

    #[test]
    fn test_fields_do_not_share_state() {
        let rules = number_and_uppercase();
        let mut a = SecurityField::mount(FieldConfig::new(), Some(rules.clone())).unwrap();
        let mut b = SecurityField::mount(FieldConfig::new(), Some(rules)).unwrap();
        a.set_value("myText9").unwrap();
        b.set_value("x").unwrap();
        assert_eq!(a.state().score.unwrap().value(), 100);
        assert_eq!(b.state().score.unwrap().value(), 0);
    }
}
