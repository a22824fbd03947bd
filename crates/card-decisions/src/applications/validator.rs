use std::collections::BTreeSet;
use std::sync::RwLock;

use super::domain::ValidationMode;

/// License value that forces every low-income application to human review.
pub const EXPIRED_LICENSE: &str = "EXPIRED";

/// Result of a single frequent-flyer lookup.
///
/// `lookup_performed` is the validator's notification that a lookup took place;
/// the evaluator counts one lookup per result carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyerValidation {
    pub is_valid: bool,
    pub lookup_performed: bool,
}

impl FlyerValidation {
    pub fn looked_up(is_valid: bool) -> Self {
        Self {
            is_valid,
            lookup_performed: true,
        }
    }
}

/// Capability contract for frequent-flyer number validation services.
pub trait FrequentFlyerValidator: Send + Sync {
    fn license(&self) -> String;
    fn validation_mode(&self) -> ValidationMode;
    fn set_validation_mode(&self, mode: ValidationMode);
    fn validate(
        &self,
        frequent_flyer_number: Option<&str>,
    ) -> Result<FlyerValidation, ValidatorError>;
}

/// Failure raised by a validator while performing a lookup.
///
/// `Unavailable` fails before any lookup is signalled; `Rejected` may carry a
/// notification raised before the failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
    #[error("validator rejected lookup: {reason}")]
    Rejected {
        reason: String,
        lookup_performed: bool,
    },
}

impl ValidatorError {
    pub fn lookup_performed(&self) -> bool {
        match self {
            ValidatorError::Unavailable(_) => false,
            ValidatorError::Rejected {
                lookup_performed, ..
            } => *lookup_performed,
        }
    }
}

/// In-process validator backed by a fixed registry of known numbers.
#[derive(Debug)]
pub struct RegistryValidator {
    license: String,
    known_numbers: BTreeSet<String>,
    mode: RwLock<ValidationMode>,
}

impl RegistryValidator {
    pub fn new<I, S>(license: impl Into<String>, known_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known_numbers = known_numbers
            .into_iter()
            .map(|number| number.as_ref().trim().to_string())
            .filter(|number| !number.is_empty())
            .collect();

        Self {
            license: license.into(),
            known_numbers,
            mode: RwLock::new(ValidationMode::default()),
        }
    }

    pub fn known_numbers(&self) -> usize {
        self.known_numbers.len()
    }
}

impl FrequentFlyerValidator for RegistryValidator {
    fn license(&self) -> String {
        self.license.clone()
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
            .read()
            .map(|mode| *mode)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        match self.mode.write() {
            Ok(mut guard) => *guard = mode,
            Err(poisoned) => *poisoned.into_inner() = mode,
        }
    }

    fn validate(
        &self,
        frequent_flyer_number: Option<&str>,
    ) -> Result<FlyerValidation, ValidatorError> {
        let is_valid = frequent_flyer_number
            .map(str::trim)
            .is_some_and(|number| self.known_numbers.contains(number));

        tracing::trace!(
            mode = self.validation_mode().label(),
            is_valid,
            "frequent flyer registry lookup"
        );

        Ok(FlyerValidation::looked_up(is_valid))
    }
}
