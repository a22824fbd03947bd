use super::domain::CardApplication;

/// Capability contract for fraud-risk screening ahead of the decision table.
pub trait FraudLookup: Send + Sync {
    fn is_fraud_risk(&self, application: &CardApplication) -> bool;
}

/// Default screen flagging applicants whose last name is exactly "Smith".
#[derive(Debug, Default, Clone, Copy)]
pub struct SurnameFraudLookup;

const FLAGGED_LAST_NAME: &str = "Smith";

impl FraudLookup for SurnameFraudLookup {
    fn is_fraud_risk(&self, application: &CardApplication) -> bool {
        application.last_name.as_deref() == Some(FLAGGED_LAST_NAME)
    }
}
