//! Condition evaluator - runs every rule against the current value.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rule::{RuleError, RuleResult, SecurityRule};
use crate::score::{score, StrengthScore};

/// Results of one evaluation pass together with the derived score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEvaluation {
    pub results: Vec<RuleResult>,
    /// `None` when no rules were evaluated.
    pub score: Option<StrengthScore>,
}

impl FieldEvaluation {
    pub fn is_fully_satisfied(&self) -> bool {
        self.score.is_some_and(|s| s.is_fully_satisfied())
    }
}

/// Evaluates every rule against `value`.
///
/// One result per rule, in rule order. All rules run on every call, even
/// after a failure. An empty rule list yields an empty result list.
///
/// # Errors
/// The first predicate error encountered is returned as
/// [`RuleError::Predicate`]; it is never reported as a failed rule.
pub fn evaluate(value: &str, rules: &[SecurityRule]) -> Result<Vec<RuleResult>, RuleError> {
    let mut results = Vec::with_capacity(rules.len());

    for rule in rules {
        match rule.check(value) {
            Ok(succeeded) => results.push(RuleResult {
                hint: rule.hint().to_string(),
                succeeded,
            }),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Fatal error in security rule evaluation: {}", e);
                return Err(e);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Evaluated {} rules, {} succeeded",
        results.len(),
        results.iter().filter(|r| r.succeeded).count()
    );

    Ok(results)
}

/// Same as [`evaluate`], on a secret value.
pub fn evaluate_secret(
    value: &SecretString,
    rules: &[SecurityRule],
) -> Result<Vec<RuleResult>, RuleError> {
    evaluate(value.expose_secret(), rules)
}

/// Evaluates the rules and scores the results in one pass.
pub fn evaluate_field(value: &str, rules: &[SecurityRule]) -> Result<FieldEvaluation, RuleError> {
    let results = evaluate(value, rules)?;
    let score = score(&results);
    Ok(FieldEvaluation { results, score })
}

/// Evaluates off the UI path and sends the outcome via channel.
///
/// Nothing is sent when `token` is cancelled before the evaluation starts or
/// before the result is delivered, so a superseded value never overwrites a
/// newer one.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    value: SecretString,
    rules: crate::rule::RuleSet,
    token: CancellationToken,
    tx: mpsc::Sender<Result<FieldEvaluation, RuleError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_field(value.expose_secret(), &rules);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation cancelled before delivery");
        return;
    }

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send field evaluation result: {}", _e);
    }
}
