use serde::{Deserialize, Serialize};

/// Final disposition of a card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::AutoAccepted => "auto_accepted",
            Decision::AutoDeclined => "auto_declined",
            Decision::ReferredToHuman => "referred_to_human",
            Decision::ReferredToHumanFraudRisk => "referred_to_human_fraud_risk",
        }
    }

    pub fn requires_review(&self) -> bool {
        matches!(
            self,
            Decision::ReferredToHuman | Decision::ReferredToHumanFraudRisk
        )
    }
}

/// Rule of the decision table that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    FraudRisk,
    IncomeAtOrAboveThreshold { threshold: i32 },
    LicenseExpired,
    ValidatorUnavailable,
    InvalidFrequentFlyerNumber,
    BelowAutoReferralAge { max_age: i32 },
    IncomeBelowThreshold { threshold: i32 },
    Fallback,
}

impl DecisionReason {
    pub fn decision(&self) -> Decision {
        match self {
            DecisionReason::FraudRisk => Decision::ReferredToHumanFraudRisk,
            DecisionReason::IncomeAtOrAboveThreshold { .. } => Decision::AutoAccepted,
            DecisionReason::IncomeBelowThreshold { .. } => Decision::AutoDeclined,
            DecisionReason::LicenseExpired
            | DecisionReason::ValidatorUnavailable
            | DecisionReason::InvalidFrequentFlyerNumber
            | DecisionReason::BelowAutoReferralAge { .. }
            | DecisionReason::Fallback => Decision::ReferredToHuman,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            DecisionReason::FraudRisk => "referred for fraud review".to_string(),
            DecisionReason::IncomeAtOrAboveThreshold { threshold } => {
                format!("accepted with gross income at or above {threshold}")
            }
            DecisionReason::LicenseExpired => {
                "referred because the validator license has expired".to_string()
            }
            DecisionReason::ValidatorUnavailable => {
                "referred because frequent flyer validation failed".to_string()
            }
            DecisionReason::InvalidFrequentFlyerNumber => {
                "referred for an unrecognised frequent flyer number".to_string()
            }
            DecisionReason::BelowAutoReferralAge { max_age } => {
                format!("referred for applicant aged {max_age} or younger")
            }
            DecisionReason::IncomeBelowThreshold { threshold } => {
                format!("declined for gross income below {threshold}")
            }
            DecisionReason::Fallback => "requires manual review".to_string(),
        }
    }
}
