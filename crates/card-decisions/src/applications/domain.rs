use serde::{Deserialize, Serialize};

/// Applicant-supplied snapshot evaluated by the card decision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardApplication {
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub gross_annual_income: i32,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Depth of checking requested from the frequent-flyer validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

impl ValidationMode {
    pub fn label(&self) -> &'static str {
        match self {
            ValidationMode::Quick => "quick",
            ValidationMode::Detailed => "detailed",
        }
    }
}
