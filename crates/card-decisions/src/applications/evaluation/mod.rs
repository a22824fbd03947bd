mod policy;
mod rules;

pub use policy::{Decision, DecisionReason};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CardApplication;
use super::fraud::FraudLookup;
use super::validator::{FrequentFlyerValidator, EXPIRED_LICENSE};
use rules::{
    meets_income_threshold, validation_mode_for, within_auto_referral_age, AUTO_REFERRAL_MAX_AGE,
    LOW_INCOME_THRESHOLD,
};

/// Decision table over a card application, backed by an injected validator.
///
/// The evaluator holds no state beyond the count of lookups the validator has
/// reported, so a single instance can be shared across threads behind an `Arc`.
pub struct CardApplicationEvaluator {
    validator: Arc<dyn FrequentFlyerValidator>,
    fraud_lookup: Option<Arc<dyn FraudLookup>>,
    lookups: AtomicU64,
}

impl CardApplicationEvaluator {
    pub fn new(validator: Arc<dyn FrequentFlyerValidator>) -> Self {
        Self {
            validator,
            fraud_lookup: None,
            lookups: AtomicU64::new(0),
        }
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    pub fn with_fraud_lookup(mut self, fraud_lookup: Arc<dyn FraudLookup>) -> Self {
        self.fraud_lookup = Some(fraud_lookup);
        self
    }

    /// Number of lookups the validator has signalled since construction.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn evaluate(&self, application: &CardApplication) -> Decision {
        self.assess(application).decision
    }

    /// Run the decision table and report which rule fired.
    pub fn assess(&self, application: &CardApplication) -> EvaluationOutcome {
        let reason = self.decide(application);
        let outcome = EvaluationOutcome::from_reason(reason);

        debug!(
            decision = outcome.decision.label(),
            reason = ?outcome.reason,
            lookups = self.lookup_count(),
            "card application evaluated"
        );

        outcome
    }

    fn decide(&self, application: &CardApplication) -> DecisionReason {
        if let Some(fraud_lookup) = &self.fraud_lookup {
            if fraud_lookup.is_fraud_risk(application) {
                return DecisionReason::FraudRisk;
            }
        }

        if meets_income_threshold(application.gross_annual_income) {
            return DecisionReason::IncomeAtOrAboveThreshold {
                threshold: LOW_INCOME_THRESHOLD,
            };
        }

        if self.validator.license() == EXPIRED_LICENSE {
            return DecisionReason::LicenseExpired;
        }

        self.validator
            .set_validation_mode(validation_mode_for(application.age));

        let result = self
            .validator
            .validate(application.frequent_flyer_number.as_deref());

        let notified = match &result {
            Ok(validation) => validation.lookup_performed,
            Err(err) => err.lookup_performed(),
        };
        if notified {
            self.lookups.fetch_add(1, Ordering::Relaxed);
        }

        let validation = match result {
            Ok(validation) => validation,
            Err(_) => return DecisionReason::ValidatorUnavailable,
        };

        if !validation.is_valid {
            return DecisionReason::InvalidFrequentFlyerNumber;
        }

        if within_auto_referral_age(application.age) {
            return DecisionReason::BelowAutoReferralAge {
                max_age: AUTO_REFERRAL_MAX_AGE,
            };
        }

        if !meets_income_threshold(application.gross_annual_income) {
            return DecisionReason::IncomeBelowThreshold {
                threshold: LOW_INCOME_THRESHOLD,
            };
        }

        DecisionReason::Fallback
    }
}

/// Assembles an evaluator from optional parts, rejecting a missing validator.
#[derive(Default)]
pub struct EvaluatorBuilder {
    validator: Option<Arc<dyn FrequentFlyerValidator>>,
    fraud_lookup: Option<Arc<dyn FraudLookup>>,
}

impl EvaluatorBuilder {
    pub fn validator(mut self, validator: Arc<dyn FrequentFlyerValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn fraud_lookup(mut self, fraud_lookup: Option<Arc<dyn FraudLookup>>) -> Self {
        self.fraud_lookup = fraud_lookup;
        self
    }

    pub fn build(self) -> Result<CardApplicationEvaluator, EvaluatorError> {
        let validator = self.validator.ok_or(EvaluatorError::MissingValidator)?;

        Ok(CardApplicationEvaluator {
            validator,
            fraud_lookup: self.fraud_lookup,
            lookups: AtomicU64::new(0),
        })
    }
}

/// Evaluation output pairing the decision with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: Decision,
    pub reason: DecisionReason,
    pub summary: String,
}

impl EvaluationOutcome {
    fn from_reason(reason: DecisionReason) -> Self {
        Self {
            decision: reason.decision(),
            summary: reason.summary(),
            reason,
        }
    }
}

/// Construction failure for the evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    #[error("a frequent flyer validator is required")]
    MissingValidator,
}
