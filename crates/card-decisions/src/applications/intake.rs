use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::CardApplication;
use super::evaluation::{CardApplicationEvaluator, EvaluationOutcome};

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read application batch: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid application CSV data: {}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Applications read from a CSV export, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationBatch {
    applications: Vec<CardApplication>,
}

impl ApplicationBatch {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut applications = Vec::new();

        for row in csv_reader.deserialize::<ApplicationRow>() {
            applications.push(row?.into());
        }

        Ok(Self { applications })
    }

    pub fn applications(&self) -> &[CardApplication] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn evaluate(&self, evaluator: &CardApplicationEvaluator) -> Vec<EvaluationOutcome> {
        self.applications
            .iter()
            .map(|application| evaluator.assess(application))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    age: i32,
    gross_annual_income: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
}

impl From<ApplicationRow> for CardApplication {
    fn from(row: ApplicationRow) -> Self {
        CardApplication {
            age: row.age,
            gross_annual_income: row.gross_annual_income,
            frequent_flyer_number: row.frequent_flyer_number,
            last_name: row.last_name,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
