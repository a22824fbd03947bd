use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::applications::domain::{CardApplication, ValidationMode};
use crate::applications::evaluation::CardApplicationEvaluator;
use crate::applications::fraud::FraudLookup;
use crate::applications::validator::{FlyerValidation, FrequentFlyerValidator, ValidatorError};

/// Canned behaviour for a scripted lookup.
#[derive(Debug, Clone, Copy)]
pub(super) enum LookupScript {
    Answer { is_valid: bool, notify: bool },
    Fail,
    FailAfterLookup,
}

/// Validator double recording every interaction made by the evaluator.
pub(super) struct ScriptedValidator {
    license: String,
    script: LookupScript,
    mode: Mutex<Option<ValidationMode>>,
    mode_writes: Mutex<Vec<ValidationMode>>,
    modes_at_lookup: Mutex<Vec<Option<ValidationMode>>>,
    numbers: Mutex<Vec<Option<String>>>,
}

impl ScriptedValidator {
    pub(super) fn new(license: &str, script: LookupScript) -> Self {
        Self {
            license: license.to_string(),
            script,
            mode: Mutex::new(None),
            mode_writes: Mutex::new(Vec::new()),
            modes_at_lookup: Mutex::new(Vec::new()),
            numbers: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn answering(is_valid: bool) -> Self {
        Self::new(
            "OK",
            LookupScript::Answer {
                is_valid,
                notify: true,
            },
        )
    }

    pub(super) fn failing() -> Self {
        Self::new("OK", LookupScript::Fail)
    }

    pub(super) fn mode_writes(&self) -> Vec<ValidationMode> {
        self.mode_writes.lock().expect("mode mutex poisoned").clone()
    }

    /// Mode the validator held when each lookup started.
    pub(super) fn modes_at_lookup(&self) -> Vec<Option<ValidationMode>> {
        self.modes_at_lookup
            .lock()
            .expect("mode mutex poisoned")
            .clone()
    }

    pub(super) fn numbers_seen(&self) -> Vec<Option<String>> {
        self.numbers.lock().expect("numbers mutex poisoned").clone()
    }

    pub(super) fn lookup_calls(&self) -> usize {
        self.numbers.lock().expect("numbers mutex poisoned").len()
    }
}

impl FrequentFlyerValidator for ScriptedValidator {
    fn license(&self) -> String {
        self.license.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
            .lock()
            .expect("mode mutex poisoned")
            .unwrap_or_default()
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        *self.mode.lock().expect("mode mutex poisoned") = Some(mode);
        self.mode_writes
            .lock()
            .expect("mode mutex poisoned")
            .push(mode);
    }

    fn validate(
        &self,
        frequent_flyer_number: Option<&str>,
    ) -> Result<FlyerValidation, ValidatorError> {
        let mode = *self.mode.lock().expect("mode mutex poisoned");
        self.modes_at_lookup
            .lock()
            .expect("mode mutex poisoned")
            .push(mode);
        self.numbers
            .lock()
            .expect("numbers mutex poisoned")
            .push(frequent_flyer_number.map(str::to_string));

        match self.script {
            LookupScript::Answer { is_valid, notify } => Ok(FlyerValidation {
                is_valid,
                lookup_performed: notify,
            }),
            LookupScript::Fail => Err(ValidatorError::Unavailable("registry timeout".to_string())),
            LookupScript::FailAfterLookup => Err(ValidatorError::Rejected {
                reason: "registry returned a corrupt record".to_string(),
                lookup_performed: true,
            }),
        }
    }
}

/// Fraud double returning a fixed verdict.
pub(super) struct FixedFraudLookup(pub(super) bool);

impl FraudLookup for FixedFraudLookup {
    fn is_fraud_risk(&self, _application: &CardApplication) -> bool {
        self.0
    }
}

pub(super) fn application(age: i32, gross_annual_income: i32) -> CardApplication {
    CardApplication {
        age,
        gross_annual_income,
        frequent_flyer_number: Some("x".to_string()),
        last_name: Some("Jones".to_string()),
    }
}

pub(super) fn evaluator_with(
    validator: ScriptedValidator,
) -> (CardApplicationEvaluator, Arc<ScriptedValidator>) {
    let validator = Arc::new(validator);
    let evaluator = CardApplicationEvaluator::new(validator.clone());
    (evaluator, validator)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
