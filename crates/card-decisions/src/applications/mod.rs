//! Card application intake and decisioning.
//!
//! The evaluator applies a fixed decision table, consulting an injected
//! frequent-flyer validator and an optional fraud screen. Batch intake and the
//! HTTP router are thin wrappers over the same evaluator.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod intake;
pub mod router;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{CardApplication, ValidationMode};
pub use evaluation::{
    CardApplicationEvaluator, Decision, DecisionReason, EvaluationOutcome, EvaluatorBuilder,
    EvaluatorError,
};
pub use fraud::{FraudLookup, SurnameFraudLookup};
pub use intake::{ApplicationBatch, IntakeError};
pub use router::application_router;
pub use validator::{
    FlyerValidation, FrequentFlyerValidator, RegistryValidator, ValidatorError, EXPIRED_LICENSE,
};
