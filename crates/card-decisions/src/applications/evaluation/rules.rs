use crate::applications::domain::ValidationMode;

pub(crate) const AUTO_REFERRAL_MAX_AGE: i32 = 20;
pub(crate) const DETAILED_VALIDATION_MIN_AGE: i32 = 30;
pub(crate) const LOW_INCOME_THRESHOLD: i32 = 20_000;
// Defined alongside the low threshold but no rule consults it yet.
#[allow(dead_code)]
pub(crate) const HIGH_INCOME_THRESHOLD: i32 = 100_000;

pub(crate) fn meets_income_threshold(gross_annual_income: i32) -> bool {
    gross_annual_income >= LOW_INCOME_THRESHOLD
}

pub(crate) fn validation_mode_for(age: i32) -> ValidationMode {
    if age >= DETAILED_VALIDATION_MIN_AGE {
        ValidationMode::Detailed
    } else {
        ValidationMode::Quick
    }
}

pub(crate) fn within_auto_referral_age(age: i32) -> bool {
    age <= AUTO_REFERRAL_MAX_AGE
}
